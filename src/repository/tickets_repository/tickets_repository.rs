use super::TicketWithType;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds first ticket of the enrollment together with its ticket type.
    /// Ticket which type does not exist is treated as not existing.
    ///
    async fn find_with_type_by_enrollment_id(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<TicketWithType>, repository::Error>;
}
