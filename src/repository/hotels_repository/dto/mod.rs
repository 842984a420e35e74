mod hotel;
mod hotel_with_rooms;
mod room;

pub use hotel::*;
pub use hotel_with_rooms::*;
pub use room::*;
