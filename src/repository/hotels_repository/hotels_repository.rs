use super::{Hotel, HotelWithRooms};
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsRepository: Send + Sync {
    ///
    /// Finds all hotels without their rooms.
    /// Hotels are sorted ascending by id.
    ///
    async fn find_all(&self) -> Result<Vec<Hotel>, repository::Error>;

    ///
    /// Finds hotel together with all of its rooms.
    /// Rooms are sorted ascending by id.
    ///
    async fn find_with_rooms(&self, id: i64) -> Result<Option<HotelWithRooms>, repository::Error>;
}
