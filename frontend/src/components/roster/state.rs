//! Component state of the roster dashboard.
//!
//! Record data and search/filter/page selection live in the shared
//! `Reconciler`; this struct only adds what is purely about presentation
//! (open menus, the dialog) plus the handles used to talk to the outside
//! world.

use common::model::student::Student;
use common::overlay::OverlayStore;
use common::pipeline::Reconciler;
use common::requests::StudentDraft;
use web_sys::{AbortController, AbortSignal};

use crate::services::collator::LocaleCollator;
use crate::services::local_slot::LocalStorageSlot;
use crate::services::remote::RemoteCollection;

/// Sidebar entries. Only `Academic` hosts the roster; the others are labels.
pub const MENU_ITEMS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("Finance", "payments"),
    ("Travel", "flight"),
    ("Academic", "school"),
];

/// What the dialog is editing.
pub enum DialogMode {
    Add,
    /// Edit of the contained record; the draft is written over a copy of it.
    Edit(Student),
}

pub struct StudentDialog {
    pub mode: DialogMode,
    pub draft: StudentDraft,
    /// First validation or remote error of the last submit.
    pub error: Option<String>,
    /// A create/update request is in flight.
    pub saving: bool,
}

impl StudentDialog {
    pub fn add() -> Self {
        Self {
            mode: DialogMode::Add,
            draft: StudentDraft::default(),
            error: None,
            saving: false,
        }
    }

    pub fn edit(student: Student) -> Self {
        Self {
            draft: StudentDraft::from_student(&student),
            mode: DialogMode::Edit(student),
            error: None,
            saving: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add Student",
            DialogMode::Edit(_) => "Edit Student",
        }
    }
}

pub struct RosterDashboard {
    pub reconciler: Reconciler<LocalStorageSlot>,
    pub remote: RemoteCollection,
    pub collator: LocaleCollator,

    /// Aborted when the component is destroyed; every request carries its signal.
    pub abort: Option<AbortController>,

    /// True until the initial fetch settles. Mutations never set it.
    pub loading: bool,
    pub filter_open: bool,
    pub profile_open: bool,
    pub sidebar_collapsed: bool,
    pub active_menu: &'static str,
    pub dialog: Option<StudentDialog>,

    /// Guard to start the initial fetch only once.
    pub loaded: bool,
}

impl RosterDashboard {
    pub fn new(api_url: &str) -> Self {
        Self {
            reconciler: Reconciler::new(OverlayStore::new(LocalStorageSlot)),
            remote: RemoteCollection::new(api_url),
            collator: LocaleCollator::new(),
            abort: AbortController::new().ok(),
            loading: true,
            filter_open: false,
            profile_open: false,
            sidebar_collapsed: false,
            active_menu: "Academic",
            dialog: None,
            loaded: false,
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.abort.as_ref().map(|controller| controller.signal())
    }
}
