mod enrollments_repository;
mod error;
mod hotels_repository;
mod sessions_repository;
mod tickets_repository;

pub use enrollments_repository::*;
pub use error::*;
pub use hotels_repository::*;
pub use sessions_repository::*;
pub use tickets_repository::*;
