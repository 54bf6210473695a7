pub mod entity_key;
pub mod student;
