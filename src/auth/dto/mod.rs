mod jwt_claims;
mod user;

pub use jwt_claims::*;
pub use user::*;
