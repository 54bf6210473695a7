use std::ops::Range;

use crate::model::student::Student;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `count` rows. Zero rows means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamps a 1-based page index into `1..=total_pages` (1 when there are no
/// pages at all).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the rows shown on `page` (1-based) out of `count` rows.
pub fn page_range(page: usize, count: usize) -> Range<usize> {
    let start = (page.max(1) - 1).saturating_mul(PAGE_SIZE).min(count);
    let end = start.saturating_add(PAGE_SIZE).min(count);
    start..end
}

/// One rendered page of the filtered and sorted working set.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Student>,
    /// 1-based index of the page in `rows`, already clamped.
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of records matching the current search, across all pages.
    pub total_matches: usize,
}

impl PageView<'_> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn last_page_is_partial() {
        assert_eq!(page_range(1, 25), 0..10);
        assert_eq!(page_range(3, 25), 20..25);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        assert_eq!(page_range(4, 25), 25..25);
        assert_eq!(page_range(1, 0), 0..0);
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
