//!
//! Ticket statuses stored by the payment flow
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum TicketStatus {
    #[strum(serialize = "RESERVED")]
    Reserved,

    // only compared against in tests
    #[allow(dead_code)]
    #[strum(serialize = "PAID")]
    Paid,
}
