use std::fmt;

use thiserror::Error;

/// The remote collection call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Failures talking to the remote collection resource.
///
/// Every variant is terminal for the one operation that raised it; callers log
/// it and leave the working set untouched.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{operation} request failed: {message}")]
    Transport { operation: Operation, message: String },

    #[error("{operation} request returned status {status}")]
    Status { operation: Operation, status: u16 },

    #[error("could not decode {operation} response: {message}")]
    Decode { operation: Operation, message: String },

    #[error("{operation} request was aborted")]
    Aborted { operation: Operation },
}

impl RemoteError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, RemoteError::Aborted { .. })
    }
}

/// Failures reading or writing the local overlay slot.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("malformed local data in slot '{key}': {source}")]
    MalformedLocalData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode local data for slot '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write slot '{key}': {message}")]
    Storage { key: String, message: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}
