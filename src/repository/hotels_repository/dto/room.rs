use crate::repository::hotels_repository::entity::RoomFindEntity;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<RoomFindEntity> for Room {
    fn from(value: RoomFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
