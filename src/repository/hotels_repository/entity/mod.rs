mod hotel_find_entity;
mod room_find_entity;

pub use hotel_find_entity::*;
pub use room_find_entity::*;
