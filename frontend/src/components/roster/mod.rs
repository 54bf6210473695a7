//! Student roster dashboard: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RosterProps`, `RosterDashboard`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, fetch the remote collection and merge it with the local
//!   overlay. On destroy, abort every request still in flight.

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RosterProps;
pub use state::RosterDashboard;

use crate::config;

impl Component for RosterDashboard {
    type Message = Msg;
    type Properties = RosterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api_url = ctx
            .props()
            .api_url
            .clone()
            .unwrap_or_else(|| config::api_url().to_string());
        RosterDashboard::new(&api_url)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let remote = self.remote.clone();
            let signal = self.signal();
            spawn_local(async move {
                match remote.list(signal.as_ref()).await {
                    Ok(students) => link.send_message(Msg::Loaded(students)),
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = self.abort.take() {
            controller.abort();
        }
    }
}
