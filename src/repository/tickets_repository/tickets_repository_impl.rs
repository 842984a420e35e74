use super::{entity::TicketWithTypeFindEntity, TicketWithType, TicketsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};

const TICKETS: &str = "tickets";
const TICKET_TYPES: &str = "ticket_types";
const INDEX_NAME_ENROLLMENT_ID: &str = "index_enrollment_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(TICKETS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "enrollment_id": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_ENROLLMENT_ID.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(
            collection = TICKETS,
            index = INDEX_NAME_ENROLLMENT_ID,
            "created index"
        );

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_with_type_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<TicketWithType>, repository::Error> {
        let ticket = self
            .database
            .collection::<Document>(TICKETS)
            .aggregate([
                doc! { "$match": { "enrollment_id": enrollment_id } },
                doc! { "$sort": { "_id": 1 } },
                doc! { "$limit": 1 },
                doc! {
                    "$lookup": {
                        "from": TICKET_TYPES,
                        "localField": "ticket_type_id",
                        "foreignField": "_id",
                        "as": "ticket_type",
                    }
                },
                doc! { "$unwind": "$ticket_type" },
            ])
            .with_type::<TicketWithTypeFindEntity>()
            .await?
            .try_next()
            .await?
            .map(TicketWithType::from);

        Ok(ticket)
    }
}
