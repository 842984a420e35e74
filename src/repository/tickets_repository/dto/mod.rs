mod ticket_status;
mod ticket_with_type;

pub use ticket_status::*;
pub use ticket_with_type::*;
