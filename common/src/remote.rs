//! Boundary types for the remote collection resource.
//!
//! The HTTP calls themselves live with the host (`gloo-net` in the browser);
//! this module fixes how their outcomes are interpreted:
//!
//! - any 2xx status is success;
//! - a `DELETE` answered with 404 is a successful logical delete
//!   (`DeleteOutcome::NotFound`), since the record is already gone;
//! - every other status is a `RemoteError::Status`.

use crate::error::{Operation, RemoteError};

pub const STATUS_NOT_FOUND: u16 = 404;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Fails with `RemoteError::Status` unless `status` is 2xx.
pub fn ensure_success(operation: Operation, status: u16) -> Result<(), RemoteError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(RemoteError::Status { operation, status })
    }
}

/// How a delete request ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The remote store did not have the record. Local state is removed anyway.
    NotFound,
}

impl DeleteOutcome {
    pub fn from_status(status: u16) -> Result<Self, RemoteError> {
        if is_success(status) {
            Ok(DeleteOutcome::Deleted)
        } else if status == STATUS_NOT_FOUND {
            Ok(DeleteOutcome::NotFound)
        } else {
            Err(RemoteError::Status {
                operation: Operation::Delete,
                status,
            })
        }
    }
}

/// URL of one member of the collection at `base`.
pub fn member_url(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}

/// URL of the collection itself, without a trailing slash.
pub fn collection_url(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}
