use super::EntitlementsService;
use crate::{
    error::Error,
    repository::{EnrollmentsRepository, TicketStatus, TicketWithType, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct EntitlementsServiceImpl {
    enrollments_repository: Arc<dyn EnrollmentsRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl EntitlementsServiceImpl {
    pub fn new(
        enrollments_repository: Arc<dyn EnrollmentsRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            enrollments_repository,
            tickets_repository,
        }
    }

    ///
    /// Only [TicketStatus::Reserved] counts as unpaid,
    /// any other status passes the payment check
    ///
    fn validate_ticket_includes_hotel(ticket: &TicketWithType) -> Result<(), Error> {
        let not_paid = ticket.status == TicketStatus::Reserved.as_ref();

        if not_paid {
            return Err(Error::PaymentRequired("ticket not paid"));
        }
        if ticket.ticket_type.is_remote {
            return Err(Error::PaymentRequired("ticket type is remote"));
        }
        if !ticket.ticket_type.includes_hotel {
            return Err(Error::PaymentRequired("ticket type does not include hotel"));
        }

        Ok(())
    }
}

#[async_trait]
impl EntitlementsService for EntitlementsServiceImpl {
    async fn check_hotel_entitlement(&self, user_id: i64) -> Result<(), Error> {
        tracing::info!("checking hotel entitlement");

        let enrollment = self
            .enrollments_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(Error::EnrollmentNotExist)?;

        let ticket = self
            .tickets_repository
            .find_with_type_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(Error::TicketNotExist)?;
        tracing::debug!(ticket_id = ticket.id, status = %ticket.status, "found ticket");

        Self::validate_ticket_includes_hotel(&ticket)?;

        tracing::info!("hotel entitlement granted");

        Ok(())
    }
}
