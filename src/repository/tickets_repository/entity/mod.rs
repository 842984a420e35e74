mod ticket_with_type_find_entity;

pub use ticket_with_type_find_entity::*;
