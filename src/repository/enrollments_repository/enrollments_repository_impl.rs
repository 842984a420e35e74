use super::{entity::EnrollmentFindEntity, Enrollment, EnrollmentsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const ENROLLMENTS: &str = "enrollments";
const INDEX_NAME_USER_ID: &str = "index_user_id";

pub struct EnrollmentsRepositoryImpl {
    database: Database,
}

impl EnrollmentsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(ENROLLMENTS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "user_id": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_USER_ID.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(
            collection = ENROLLMENTS,
            index = INDEX_NAME_USER_ID,
            "created index"
        );

        Ok(Self { database })
    }
}

#[async_trait]
impl EnrollmentsRepository for EnrollmentsRepositoryImpl {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Enrollment>, repository::Error> {
        let enrollment = self
            .database
            .collection::<EnrollmentFindEntity>(ENROLLMENTS)
            .find_one(doc! {
                "user_id": user_id,
            })
            .await?
            .map(Enrollment::from);

        Ok(enrollment)
    }
}
