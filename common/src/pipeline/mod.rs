//! # Reconciliation pipeline
//!
//! Turns the remote snapshot and the local overlay into the rows the dashboard
//! renders.
//!
//! ## Stages
//!
//! 1.  **Merge** (`merge`): local overlay first, then every remote record whose
//!     `EntityKey` is not already in the overlay, collapsed so each key occurs
//!     once (first occurrence wins).
//! 2.  **Filter** (`filter`): prefix match on the first name for the `all` and
//!     `firstname` selectors, substring match on the chosen field otherwise.
//! 3.  **Sort** (`sort`): by first name, only while a search term is active.
//! 4.  **Paginate** (`pagination`): fixed pages of `PAGE_SIZE` rows.
//!
//! `Roster` owns the merged working set and applies incremental updates after
//! add/edit/delete. `ViewState` carries the search term, filter and page.
//! `Reconciler` ties both to the `OverlayStore` so mutations are mirrored into
//! local storage.

pub mod filter;
pub mod merge;
pub mod pagination;
pub mod reconciler;
pub mod roster;
pub mod sort;
pub mod view_state;

pub use filter::FilterField;
pub use pagination::{PageView, PAGE_SIZE};
pub use reconciler::Reconciler;
pub use roster::Roster;
pub use sort::{CaseFold, Collate};
pub use view_state::ViewState;
