use super::se_iso8601;
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(with = "se_iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "se_iso8601")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Hotel> for Hotel {
    fn from(value: repository::Hotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            image: value.image,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
