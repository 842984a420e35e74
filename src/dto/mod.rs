//!
//! Module with all dtos that are passed from server to users
//!

pub mod output;
