mod hotel;
mod hotel_with_rooms;
mod room;
mod se_iso8601;

pub use hotel::*;
pub use hotel_with_rooms::*;
pub use room::*;
