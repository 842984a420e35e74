use crate::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntitlementsService: Send + Sync {
    ///
    /// Checks whether user is allowed to browse hotels.
    ///
    /// ### Errors
    /// - [Error::EnrollmentNotExist] when user has no enrollment
    /// - [Error::TicketNotExist] when enrollment has no ticket
    /// - [Error::PaymentRequired] when
    ///     - ticket is reserved but not paid
    ///     - ticket type is remote
    ///     - ticket type does not include hotel
    ///
    async fn check_hotel_entitlement(&self, user_id: i64) -> Result<(), Error>;
}
