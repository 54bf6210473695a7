//! Utility functions for the roster dashboard.
//!
//! - **User Feedback**: transient toast notifications and the delete
//!   confirmation prompt.
//! - **Dates**: the creation timestamp written on new records, and its
//!   rendering in the table.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Shows `message` at the bottom of the page for three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(17, 24, 39, 0.9)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Blocking `window.confirm`. Answers `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Current time as an ISO-8601 string, e.g. `2026-10-18T09:30:00.000Z`.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Localized date part of a stored timestamp, or an empty string when the
/// record has none.
pub fn format_date(date: Option<&str>) -> String {
    match date {
        Some(raw) if !raw.is_empty() => js_sys::Date::new(&JsValue::from_str(raw))
            .to_locale_date_string("default", &JsValue::UNDEFINED)
            .into(),
        _ => String::new(),
    }
}
