mod hotels_service;
mod hotels_service_impl;

pub use hotels_service::*;
pub use hotels_service_impl::*;
