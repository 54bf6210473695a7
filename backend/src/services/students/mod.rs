//! # Student Collection Service
//!
//! A local stand-in for the hosted mock API the dashboard talks to. It exposes
//! one REST collection with the same shape and status codes, so the dashboard
//! can run against this server or against a third-party host unchanged.
//!
//! ## Sub-modules:
//! - `list`: returns every stored record.
//! - `create`: stores a new record under a fresh id.
//! - `update`: replaces a stored record.
//! - `delete`: removes a stored record, answering `404` when it is already gone.

mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path of the collection.
pub const API_PATH: &str = "/api/students";

/// Configures and returns the Actix `Scope` for the collection.
///
/// # Registered Routes:
///
/// *   **`GET /`** → `list::process`: `200 OK` with a JSON array of records.
/// *   **`POST /`** → `create::process`: `201 Created` with the stored record,
///     including its assigned `id`.
/// *   **`PUT /{id}`** → `update::process`: `200 OK` with the stored record, or
///     `404 Not Found`.
/// *   **`DELETE /{id}`** → `delete::process`: `200 OK` with the removed record,
///     or `404 Not Found`.
///
/// Store failures answer `503 Service Unavailable`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
