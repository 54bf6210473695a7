use std::cmp::Ordering;

use common::pipeline::Collate;
use js_sys::{Array, JsString, Object, Reflect};
use wasm_bindgen::JsValue;

/// `String.prototype.localeCompare` with `sensitivity: "base"`, using the
/// browser's default locale.
pub struct LocaleCollator {
    locales: Array,
    options: Object,
}

impl LocaleCollator {
    pub fn new() -> Self {
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("sensitivity"),
            &JsValue::from_str("base"),
        )
        .ok();
        Self {
            locales: Array::new(),
            options,
        }
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collate for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        JsString::from(a)
            .locale_compare(b, &self.locales, &self.options)
            .cmp(&0)
    }
}
