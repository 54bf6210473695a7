//! Local overlay of records created on this client.
//!
//! The overlay is a JSON array of `Student` kept under a single key of some
//! string key/value storage: `window.localStorage` in the browser,
//! `MemorySlot` in tests. It survives reloads so records added here stay
//! visible even when the remote snapshot lags behind.
//!
//! Reads never fail: a missing or malformed slot reads as an empty overlay and
//! the parse error is logged. Writes report errors to the caller, which logs
//! them and carries on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use crate::error::OverlayError;
use crate::model::student::Student;

/// Storage key holding the overlay.
pub const LOCAL_KEY: &str = "localStudents";

/// A string key/value store with synchronous access.
pub trait SlotStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), OverlayError>;
}

/// In-process `SlotStorage`. Clones share the same cells.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    cells: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value without any encoding, e.g. to simulate corruption.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.cells.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl SlotStorage for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), OverlayError> {
        self.put_raw(key, value);
        Ok(())
    }
}

pub struct OverlayStore<S> {
    slot: S,
    key: String,
}

impl<S: SlotStorage> OverlayStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, LOCAL_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored overlay, or an empty one if the slot is missing or malformed.
    pub fn read(&self) -> Vec<Student> {
        match self.try_read() {
            Ok(students) => students,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Like `read`, but surfaces `MalformedLocalData`. A JSON `null` counts as
    /// empty.
    pub fn try_read(&self) -> Result<Vec<Student>, OverlayError> {
        let Some(raw) = self.slot.get(&self.key) else {
            return Ok(Vec::new());
        };
        serde_json::from_str::<Option<Vec<Student>>>(&raw)
            .map(Option::unwrap_or_default)
            .map_err(|source| OverlayError::MalformedLocalData {
                key: self.key.clone(),
                source,
            })
    }

    /// Inserts `student` at the front and persists the whole sequence.
    pub fn prepend(&self, student: Student) -> Result<(), OverlayError> {
        let mut students = self.read();
        students.insert(0, student);
        self.write(&students)
    }

    /// Drops every record whose id equals `id` and persists the rest.
    pub fn remove(&self, id: &str) -> Result<(), OverlayError> {
        let mut students = self.read();
        students.retain(|student| !student.has_id(id));
        self.write(&students)
    }

    fn write(&self, students: &[Student]) -> Result<(), OverlayError> {
        let encoded = serde_json::to_string(students).map_err(|source| OverlayError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.slot.set(&self.key, &encoded)
    }
}
