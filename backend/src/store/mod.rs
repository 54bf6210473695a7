//! SQLite persistence behind the mock student collection.
//!
//! Each record is stored as its JSON document next to an integer primary key.
//! The key is the record's id, written back into the document as a string so
//! clients see the same shape a hosted mock API returns.

pub mod students;

pub use students::StudentStore;
