mod dto;
mod entity;
mod sessions_repository;
mod sessions_repository_impl;

pub use dto::Session;
pub use sessions_repository::*;
pub use sessions_repository_impl::*;
