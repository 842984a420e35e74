use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("enrollment not exist")]
    EnrollmentNotExist,

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("hotel not exist")]
    HotelNotExist,

    #[error("no hotels exist")]
    HotelsNotExist,

    #[error("payment required: {0}")]
    PaymentRequired(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::EnrollmentNotExist
            | Error::TicketNotExist
            | Error::HotelNotExist
            | Error::HotelsNotExist => StatusCode::NOT_FOUND,
            Error::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_variants_status() {
        let errors = [
            Error::EnrollmentNotExist,
            Error::TicketNotExist,
            Error::HotelNotExist,
            Error::HotelsNotExist,
        ];

        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn payment_required_status() {
        let response = Error::PaymentRequired("ticket not paid").into_response();

        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }
}
