use log::{debug, warn};

use crate::model::student::Student;
use crate::overlay::{OverlayStore, SlotStorage};
use crate::remote::DeleteOutcome;

use super::filter::FilterField;
use super::pagination::{total_pages, PageView};
use super::roster::Roster;
use super::sort::Collate;
use super::view_state::ViewState;

/// Working set, view state and local overlay kept consistent with each other.
///
/// This is what the dashboard drives: it feeds in the results of remote calls
/// and user input, and reads back `page_view`. Overlay write failures are
/// logged and otherwise ignored; the in-memory working set is still updated.
pub struct Reconciler<S> {
    roster: Roster,
    view: ViewState,
    overlay: OverlayStore<S>,
}

impl<S: SlotStorage> Reconciler<S> {
    pub fn new(overlay: OverlayStore<S>) -> Self {
        Self {
            roster: Roster::default(),
            view: ViewState::default(),
            overlay,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn overlay(&self) -> &OverlayStore<S> {
        &self.overlay
    }

    /// Rebuilds the working set from the stored overlay and a fresh remote
    /// snapshot.
    pub fn load(&mut self, remote: Vec<Student>) {
        let local = self.overlay.read();
        debug!("merging {} local and {} remote records", local.len(), remote.len());
        self.roster = Roster::from_sources(local, remote);
    }

    /// Records a student the remote store just created. The search is cleared
    /// so the new row is visible on page 1.
    pub fn add(&mut self, created: Student) {
        if let Err(e) = self.overlay.prepend(created.clone()) {
            warn!("{}", e);
        }
        self.roster.apply_added(created);
        self.view.clear_search();
    }

    /// Records an update acknowledged by the remote store. The overlay is left
    /// as it is.
    pub fn edit(&mut self, updated: Student) -> bool {
        let replaced = self.roster.apply_edited(updated);
        self.view.clamp_to(self.total_pages());
        replaced
    }

    /// Records a delete. Both outcomes remove the record locally.
    pub fn delete(&mut self, id: &str, outcome: DeleteOutcome) -> usize {
        if outcome == DeleteOutcome::NotFound {
            warn!("student {} not found on server, removing locally", id);
        }
        if let Err(e) = self.overlay.remove(id) {
            warn!("{}", e);
        }
        let removed = self.roster.apply_deleted(id);
        self.view.clamp_to(self.total_pages());
        removed
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub fn clear_search(&mut self) {
        self.view.clear_search();
    }

    pub fn set_filter(&mut self, filter: FilterField) {
        self.view.set_filter(filter);
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.view.next_page(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.view.prev_page()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.roster.match_count(&self.view))
    }

    pub fn page_view<C: Collate + ?Sized>(&self, collator: &C) -> PageView<'_> {
        self.roster.page_view(&self.view, collator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::MemorySlot;
    use crate::pipeline::sort::CaseFold;

    fn student(id: &str, firstname: &str) -> Student {
        Student {
            id: Some(id.into()),
            firstname: Some(firstname.into()),
            mail: Some(format!("{}@x.com", firstname.to_lowercase())),
            ..Default::default()
        }
    }

    fn reconciler(slot: &MemorySlot) -> Reconciler<MemorySlot> {
        Reconciler::new(OverlayStore::new(slot.clone()))
    }

    fn firstnames<S: SlotStorage>(r: &Reconciler<S>) -> Vec<String> {
        r.roster().working_set().map(|s| s.firstname_text().to_string()).collect()
    }

    #[test]
    fn added_record_survives_a_reload_against_a_stale_remote() {
        let slot = MemorySlot::new();
        let remote = vec![student("1", "Amy"), student("2", "Bob")];

        let mut session = reconciler(&slot);
        session.load(remote.clone());
        session.add(student("3", "Cleo"));
        assert_eq!(firstnames(&session), vec!["Cleo", "Amy", "Bob"]);

        let mut reloaded = reconciler(&slot);
        reloaded.load(remote);
        assert_eq!(firstnames(&reloaded), vec!["Cleo", "Amy", "Bob"]);
    }

    #[test]
    fn add_clears_the_search_and_returns_to_page_one() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load((1..=25).map(|i| student(&i.to_string(), &format!("N{}", i))).collect());
        session.set_search_term("n");
        session.next_page();
        assert_eq!(session.view().page(), 2);

        session.add(student("99", "Zoe"));

        assert_eq!(session.view().search_term(), "");
        assert_eq!(session.view().page(), 1);
        let view = session.page_view(&CaseFold);
        assert_eq!(view.rows[0].firstname_text(), "Zoe");
    }

    #[test]
    fn delete_not_found_still_removes_everywhere() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load(vec![student("1", "Amy")]);
        session.add(student("7", "Local"));

        let removed = session.delete("7", DeleteOutcome::NotFound);

        assert_eq!(removed, 1);
        assert_eq!(firstnames(&session), vec!["Amy"]);
        assert!(session.overlay().read().is_empty());
    }

    #[test]
    fn deleted_local_record_does_not_come_back() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load(Vec::new());
        session.add(student("5", "Gone"));
        session.delete("5", DeleteOutcome::Deleted);

        let mut reloaded = reconciler(&slot);
        reloaded.load(Vec::new());
        assert!(reloaded.roster().is_empty());
    }

    #[test]
    fn edit_is_not_mirrored_into_the_overlay() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load(Vec::new());
        session.add(student("4", "Before"));

        let mut edited = student("4", "Before");
        edited.lastname = Some("Changed".into());
        assert!(session.edit(edited));

        assert_eq!(session.roster().find("4").map(|s| s.lastname_text()), Some("Changed"));
        assert_eq!(session.overlay().read()[0].lastname, None);
    }

    #[test]
    fn edit_that_leaves_the_search_pulls_the_page_back() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load((1..=21).map(|i| student(&i.to_string(), &format!("N{}", i))).collect());
        session.set_search_term("n");
        session.next_page();
        session.next_page();
        assert_eq!(session.view().page(), 3);

        assert!(session.edit(student("20", "Zed")));
        assert!(session.edit(student("21", "Yara")));

        assert_eq!(session.total_pages(), 2);
        assert_eq!(session.view().page(), 2);
        assert_eq!(session.page_view(&CaseFold).current_page, 2);
        assert!(session.prev_page());
        assert_eq!(session.view().page(), 1);
    }

    #[test]
    fn paging_goes_through_the_reconciler() {
        let slot = MemorySlot::new();
        let mut session = reconciler(&slot);
        session.load((1..=12).map(|i| student(&i.to_string(), &format!("N{}", i))).collect());

        assert!(!session.prev_page());
        assert!(session.next_page());
        assert!(!session.next_page());
        assert_eq!(session.page_view(&CaseFold).rows.len(), 2);

        session.set_filter(FilterField::Role);
        assert_eq!(session.view().page(), 1);
    }

    #[test]
    fn malformed_overlay_does_not_block_the_load() {
        let slot = MemorySlot::new();
        slot.put_raw(crate::overlay::LOCAL_KEY, "oops");
        let mut session = reconciler(&slot);

        session.load(vec![student("1", "Amy")]);

        assert_eq!(firstnames(&session), vec!["Amy"]);
    }
}
