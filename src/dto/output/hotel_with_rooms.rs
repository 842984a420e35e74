use super::{se_iso8601, Room};
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

///
/// Hotel with all of its rooms.
/// `Rooms` is always serialized as an array, empty when hotel has no rooms.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(with = "se_iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "se_iso8601")]
    pub updated_at: OffsetDateTime,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

impl From<repository::HotelWithRooms> for HotelWithRooms {
    fn from(value: repository::HotelWithRooms) -> Self {
        let repository::HotelWithRooms { hotel, rooms } = value;

        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
            rooms: rooms.into_iter().map(Room::from).collect(),
        }
    }
}
