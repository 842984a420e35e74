use bson::DateTime;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RoomFindEntity {
    pub _id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
