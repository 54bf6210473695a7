//! Shared roster core used by both the dashboard (`frontend`) and the local
//! mock collection host (`backend`).
//!
//! - `model`: the `Student` record and its `EntityKey`.
//! - `requests`: form drafts sent to the remote collection.
//! - `pipeline`: merge, dedup, filter, sort and pagination of the working set.
//! - `overlay`: the client-side overlay of locally created records.
//! - `remote`: status classification for the remote collection boundary.
//! - `error`: error taxonomy shared by all of the above.

pub mod error;
pub mod model;
pub mod overlay;
pub mod pipeline;
pub mod remote;
pub mod requests;
