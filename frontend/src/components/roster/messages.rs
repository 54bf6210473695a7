use common::error::RemoteError;
use common::model::student::Student;
use common::pipeline::FilterField;
use common::remote::DeleteOutcome;
use common::requests::DraftField;

pub enum Msg {
    Loaded(Vec<Student>),
    LoadFailed(RemoteError),
    SetSearch(String),
    ClearSearch,
    SetFilter(FilterField),
    ToggleFilterMenu,
    ToggleProfileMenu,
    ToggleSidebar,
    SelectMenu(&'static str),
    NextPage,
    PrevPage,
    OpenAdd,
    OpenEdit(String),
    CloseDialog,
    DraftChanged(DraftField, String),
    SubmitDialog,
    Added(Student),
    Edited(Student),
    MutationFailed(RemoteError),
    RequestDelete(String),
    Deleted(String, DeleteOutcome),
    Logout,
}
