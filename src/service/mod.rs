pub mod entitlements_service;
pub mod hotels_service;
