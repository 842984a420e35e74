use super::{Hotel, Room};

#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,

    /// sorted ascending by id
    pub rooms: Vec<Room>,
}
