use std::cmp::Ordering;

use crate::model::entity_key::KeyedStudent;

/// String comparison used to order rows by first name.
///
/// The browser plugs in `localeCompare` with base sensitivity; `CaseFold`
/// is the locale-independent fallback.
pub trait Collate {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Compares lowercased strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFold;

impl Collate for CaseFold {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

/// Stable ascending sort by first name. Ties keep working set order.
pub fn sort_by_firstname<C: Collate + ?Sized>(rows: &mut [&KeyedStudent], collator: &C) {
    rows.sort_by(|a, b| {
        collator.compare(
            &a.student.firstname_text().to_lowercase(),
            &b.student.firstname_text().to_lowercase(),
        )
    });
}
