//! Client-only session flag.
//!
//! The flag lives in `sessionStorage` under `isLoggedIn`. It gates nothing on
//! the server; it only decides whether the dashboard or the sign-in card is
//! shown.

use web_sys::Storage;

pub const SESSION_KEY: &str = "isLoggedIn";

fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn is_logged_in() -> bool {
    session_storage()
        .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
        .is_some_and(|v| v == "true")
}

pub fn log_in() {
    if let Some(storage) = session_storage() {
        storage.set_item(SESSION_KEY, "true").ok();
    }
}

pub fn log_out() {
    if let Some(storage) = session_storage() {
        storage.remove_item(SESSION_KEY).ok();
    }
}
