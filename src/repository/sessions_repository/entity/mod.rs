mod session_find_entity;

pub use session_find_entity::*;
