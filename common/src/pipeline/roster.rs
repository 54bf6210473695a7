use crate::model::entity_key::KeyedStudent;
use crate::model::student::Student;

use super::filter::filter;
use super::merge::{dedup_by_key, merge_sources};
use super::pagination::{clamp_page, page_range, total_pages, PageView};
use super::sort::{sort_by_firstname, Collate};
use super::view_state::ViewState;

/// The working set: every record the dashboard knows about, deduplicated and
/// ordered most-recently-added-locally first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<KeyedStudent>,
}

impl Roster {
    /// Builds the working set from the local overlay and a remote snapshot.
    pub fn from_sources(overlay: Vec<Student>, remote: Vec<Student>) -> Self {
        Self {
            entries: merge_sources(overlay, remote),
        }
    }

    pub fn working_set(&self) -> impl Iterator<Item = &Student> {
        self.entries.iter().map(|entry| &entry.student)
    }

    pub fn entries(&self) -> &[KeyedStudent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.working_set().find(|student| student.has_id(id))
    }

    /// Puts a record just created on the remote store at the front.
    /// When a record with the same key is already present, the front slot
    /// keeps that older record's data.
    pub fn apply_added(&mut self, student: Student) {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(KeyedStudent::new(student));
        entries.append(&mut self.entries);
        self.entries = dedup_by_key(entries);
    }

    /// Replaces, in place, every record whose id matches the updated record.
    /// Returns `false` when no record carries that id.
    pub fn apply_edited(&mut self, student: Student) -> bool {
        let Some(id) = student.id_text() else {
            return false;
        };

        let mut replaced = false;
        for entry in self.entries.iter_mut() {
            if entry.student.has_id(&id) {
                *entry = KeyedStudent::new(student.clone());
                replaced = true;
            }
        }

        if replaced {
            self.entries = dedup_by_key(std::mem::take(&mut self.entries));
        }
        replaced
    }

    /// Removes every record with `id`. Returns how many were removed.
    pub fn apply_deleted(&mut self, id: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.student.has_id(id));
        before - self.entries.len()
    }

    /// Number of records matching the state's search.
    pub fn match_count(&self, state: &ViewState) -> usize {
        filter(&self.entries, state.filter(), state.search_term()).len()
    }

    /// Filters, sorts (only while searching) and slices the working set for
    /// the page selected in `state`.
    pub fn page_view<C: Collate + ?Sized>(&self, state: &ViewState, collator: &C) -> PageView<'_> {
        let mut rows = filter(&self.entries, state.filter(), state.search_term());
        if state.is_searching() {
            sort_by_firstname(&mut rows, collator);
        }

        let total_matches = rows.len();
        let total_pages = total_pages(total_matches);
        let current_page = clamp_page(state.page(), total_pages);
        let range = page_range(current_page, total_matches);

        PageView {
            rows: rows[range].iter().map(|&entry| &entry.student).collect(),
            current_page,
            total_pages,
            total_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::filter::FilterField;
    use crate::pipeline::sort::CaseFold;

    fn student(id: &str, firstname: &str) -> Student {
        Student {
            id: Some(id.into()),
            firstname: Some(firstname.into()),
            mail: Some(format!("{}@x.com", id)),
            ..Default::default()
        }
    }

    fn names(view: &PageView<'_>) -> Vec<String> {
        view.rows.iter().map(|s| s.firstname_text().to_string()).collect()
    }

    fn roster_of(count: usize) -> Roster {
        let remote = (1..=count).map(|i| student(&i.to_string(), &format!("Name{:02}", i))).collect();
        Roster::from_sources(Vec::new(), remote)
    }

    #[test]
    fn bob_wins_over_robert() {
        let overlay = vec![Student {
            id: Some("1".into()),
            mail: Some("a@x.com".into()),
            firstname: Some("Bob".into()),
            ..Default::default()
        }];
        let remote = vec![
            Student {
                id: Some("1".into()),
                mail: Some("a@x.com".into()),
                firstname: Some("Robert".into()),
                ..Default::default()
            },
            Student {
                id: Some("2".into()),
                mail: Some("b@x.com".into()),
                firstname: Some("Amy".into()),
                ..Default::default()
            },
        ];

        let roster = Roster::from_sources(overlay, remote);
        let firstnames: Vec<&str> = roster.working_set().map(|s| s.firstname_text()).collect();
        assert_eq!(firstnames, vec!["Bob", "Amy"]);
    }

    #[test]
    fn without_search_order_is_working_set_order() {
        let roster = Roster::from_sources(
            Vec::new(),
            vec![student("1", "Zed"), student("2", "amy"), student("3", "Bob")],
        );

        let view = roster.page_view(&ViewState::default(), &CaseFold);

        assert_eq!(names(&view), vec!["Zed", "amy", "Bob"]);
    }

    #[test]
    fn searching_sorts_by_firstname() {
        let roster = Roster::from_sources(
            Vec::new(),
            vec![student("1", "Sam"), student("2", "amy"), student("3", "Bob"), student("4", "Al")],
        );
        let mut state = ViewState::default();
        state.set_filter(FilterField::Lastname);
        state.set_search_term("");
        assert_eq!(names(&roster.page_view(&state, &CaseFold)), vec!["Sam", "amy", "Bob", "Al"]);

        state.set_filter(FilterField::All);
        state.set_search_term("a");
        assert_eq!(names(&roster.page_view(&state, &CaseFold)), vec!["Al", "amy"]);
    }

    #[test]
    fn am_prefix_example() {
        let roster = Roster::from_sources(
            Vec::new(),
            vec![student("1", "Bob"), student("2", "Samantha"), student("3", "Amy")],
        );
        let mut state = ViewState::default();
        state.set_search_term("am");

        assert_eq!(names(&roster.page_view(&state, &CaseFold)), vec!["Amy"]);
    }

    #[test]
    fn pages_hold_ten_rows() {
        let roster = roster_of(23);
        let mut state = ViewState::default();

        let first = roster.page_view(&state, &CaseFold);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        state.next_page(first.total_pages);
        state.next_page(first.total_pages);
        let last = roster.page_view(&state, &CaseFold);
        assert_eq!(last.current_page, 3);
        assert_eq!(last.rows.len(), 3);
        assert_eq!(last.rows[0].firstname_text(), "Name21");
        assert!(!last.has_next());

        assert!(!state.next_page(last.total_pages));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn empty_result_reports_page_one_of_zero() {
        let roster = roster_of(4);
        let mut state = ViewState::default();
        state.set_search_term("nobody");

        let view = roster.page_view(&state, &CaseFold);

        assert!(view.rows.is_empty());
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.total_matches, 0);
    }

    #[test]
    fn stale_page_is_clamped_after_delete() {
        let mut roster = roster_of(11);
        let mut state = ViewState::default();
        state.next_page(2);

        assert_eq!(roster.apply_deleted("11"), 1);
        let view = roster.page_view(&state, &CaseFold);

        assert_eq!(view.current_page, 1);
        assert_eq!(view.rows.len(), 10);
    }

    #[test]
    fn added_record_goes_first() {
        let mut roster = roster_of(2);
        roster.apply_added(student("99", "New"));

        let firstnames: Vec<&str> = roster.working_set().map(|s| s.firstname_text()).collect();
        assert_eq!(firstnames, vec!["New", "Name01", "Name02"]);
    }

    #[test]
    fn adding_an_existing_key_moves_the_older_record_to_the_front() {
        let mut roster = roster_of(3);
        roster.apply_added(student("2", "Renamed"));

        let firstnames: Vec<&str> = roster.working_set().map(|s| s.firstname_text()).collect();
        assert_eq!(firstnames, vec!["Name02", "Name01", "Name03"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut roster = roster_of(3);
        assert!(roster.apply_edited(student("2", "Edited")));

        let firstnames: Vec<&str> = roster.working_set().map(|s| s.firstname_text()).collect();
        assert_eq!(firstnames, vec!["Name01", "Edited", "Name03"]);
    }

    #[test]
    fn edit_of_unknown_or_unsynced_record_changes_nothing() {
        let mut roster = roster_of(2);
        let before = roster.clone();

        assert!(!roster.apply_edited(student("42", "Ghost")));
        assert!(!roster.apply_edited(Student {
            firstname: Some("NoId".into()),
            ..Default::default()
        }));
        assert_eq!(roster, before);
    }

    #[test]
    fn edit_that_changes_mail_rekeys_the_record() {
        let mut roster = roster_of(2);
        let mut edited = student("1", "Name01");
        edited.mail = Some("changed@x.com".into());

        roster.apply_edited(edited);

        assert_eq!(roster.entries()[0].key.as_str(), "1-changed@x.com");
    }

    #[test]
    fn delete_of_absent_id_removes_nothing() {
        let mut roster = roster_of(2);
        assert_eq!(roster.apply_deleted("404"), 0);
        assert_eq!(roster.len(), 2);
    }
}
