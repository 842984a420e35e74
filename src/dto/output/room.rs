use super::se_iso8601;
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    #[serde(with = "se_iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "se_iso8601")]
    pub updated_at: OffsetDateTime,
}

impl From<repository::Room> for Room {
    fn from(value: repository::Room) -> Self {
        Self {
            id: value.id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
