use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelsService: Send + Sync {
    ///
    /// Find all hotels, user has to be entitled to browse hotels
    ///
    /// ### Returns
    /// Vec of hotels without rooms, never empty
    ///
    /// ### Errors
    /// - errors of [crate::service::entitlements_service::EntitlementsService::check_hotel_entitlement]
    /// - [Error::HotelsNotExist] when there are no hotels
    ///
    async fn find_hotels(&self, user_id: i64) -> Result<Vec<output::Hotel>, Error>;

    ///
    /// Find hotel with all of its rooms, user has to be entitled to browse hotels
    ///
    /// ### Errors
    /// - errors of [crate::service::entitlements_service::EntitlementsService::check_hotel_entitlement]
    /// - [Error::HotelNotExist] when hotel with id does not exist
    ///
    async fn find_hotel_with_rooms(
        &self,
        user_id: i64,
        hotel_id: i64,
    ) -> Result<output::HotelWithRooms, Error>;
}
