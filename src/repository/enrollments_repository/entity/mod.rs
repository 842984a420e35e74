mod enrollment_find_entity;

pub use enrollment_find_entity::*;
