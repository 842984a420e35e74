mod dto;
mod entity;
mod hotels_repository;
mod hotels_repository_impl;

pub use dto::*;
pub use hotels_repository::*;
pub use hotels_repository_impl::*;
