//! Properties of the `RosterDashboard` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterProps {
    /// Emitted after the session flag has been cleared.
    pub on_logout: Callback<()>,

    /// Base URL of the student collection. Defaults to `config::api_url()`.
    #[prop_or_default]
    pub api_url: Option<String>,
}
