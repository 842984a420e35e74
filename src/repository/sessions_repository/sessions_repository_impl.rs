use super::{entity::SessionFindEntity, Session, SessionsRepository};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const SESSIONS: &str = "sessions";
const INDEX_NAME_TOKEN: &str = "index_token";

pub struct SessionsRepositoryImpl {
    database: Database,
}

impl SessionsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(SESSIONS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "token": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_TOKEN.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(collection = SESSIONS, index = INDEX_NAME_TOKEN, "created index");

        Ok(Self { database })
    }
}

#[async_trait]
impl SessionsRepository for SessionsRepositoryImpl {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, repository::Error> {
        let session = self
            .database
            .collection::<SessionFindEntity>(SESSIONS)
            .find_one(doc! {
                "token": token,
            })
            .await?
            .map(Session::from);

        Ok(session)
    }
}
