//! Build-time configuration of the dashboard.
//!
//! The bundle is static, so settings are read with `option_env!` when it is
//! compiled:
//!
//! - `ROSTER_API_URL`: base URL of the student collection. Defaults to the
//!   collection served by `backend` on the same origin.
//! - `ROSTER_DIAGNOSTICS`: `1`/`true` enables debug logging, including working
//!   set snapshots after every change.

pub const DEFAULT_API_URL: &str = "/api/students";

pub fn api_url() -> &'static str {
    option_env!("ROSTER_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

pub fn diagnostics_enabled() -> bool {
    matches!(
        option_env!("ROSTER_DIAGNOSTICS"),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}
