mod entitlements_service;
mod entitlements_service_impl;

pub use entitlements_service::*;
pub use entitlements_service_impl::*;
