use super::filter::FilterField;

/// Search, filter and page selection of the dashboard table.
///
/// Kept apart from the records so the pipeline can be exercised without any
/// rendering. Changing the search term or the filter always returns to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    filter: FilterField,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter: FilterField::All,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter(&self) -> FilterField {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows are sorted and filtered only while this is true.
    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    pub fn set_filter(&mut self, filter: FilterField) {
        self.filter = filter;
        self.page = 1;
    }

    /// Moves forward one page. Returns `false` (and does nothing) on the last page.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page. Returns `false` (and does nothing) on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls the page back inside `1..=total_pages`, e.g. after a delete
    /// emptied the last page.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.page = super::pagination::clamp_page(self.page, total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page_with_no_search() {
        let state = ViewState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.filter(), FilterField::All);
        assert!(!state.is_searching());
    }

    #[test]
    fn paging_stops_at_both_ends() {
        let mut state = ViewState::default();
        assert!(!state.prev_page());
        assert_eq!(state.page(), 1);

        assert!(state.next_page(2));
        assert_eq!(state.page(), 2);
        assert!(!state.next_page(2));
        assert_eq!(state.page(), 2);

        assert!(state.prev_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn next_page_with_no_pages_is_a_no_op() {
        let mut state = ViewState::default();
        assert!(!state.next_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn search_and_filter_changes_reset_the_page() {
        let mut state = ViewState::default();
        state.next_page(5);
        state.next_page(5);
        state.set_search_term("am");
        assert_eq!(state.page(), 1);

        state.next_page(5);
        state.set_filter(FilterField::Role);
        assert_eq!(state.page(), 1);
        assert_eq!(state.search_term(), "am");
    }

    #[test]
    fn clearing_the_search_returns_to_page_one() {
        let mut state = ViewState::default();
        state.set_search_term("a");
        state.next_page(4);
        state.next_page(4);

        state.clear_search();

        assert_eq!(state.page(), 1);
        assert!(!state.is_searching());
    }

    #[test]
    fn clamp_pulls_back_a_stale_page() {
        let mut state = ViewState::default();
        state.next_page(3);
        state.next_page(3);
        state.clamp_to(2);
        assert_eq!(state.page(), 2);
    }
}
