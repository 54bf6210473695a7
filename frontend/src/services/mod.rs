//! Browser-side implementations of the roster's collaborators.
//!
//! - `remote`: the student collection over HTTP (`gloo-net`), abortable.
//! - `local_slot`: `window.localStorage` as the overlay's `SlotStorage`.
//! - `session`: the client-only login flag in `sessionStorage`.
//! - `collator`: locale-aware first-name ordering via `localeCompare`.
//! - `console_log`: routes `log` records to the browser console.

pub mod collator;
pub mod console_log;
pub mod local_slot;
pub mod remote;
pub mod session;
