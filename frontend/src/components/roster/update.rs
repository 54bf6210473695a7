//! Update function for the roster dashboard.
//!
//! Elm-style: takes the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether to re-render. Remote calls are spawned here
//! and report back with another `Msg`; their results go through the
//! `Reconciler`, which keeps the working set and the local overlay in step.
//!
//! Failures are logged and shown as a toast; the working set is left as it
//! was. Aborted calls (component already gone) are dropped silently.

use common::error::RemoteError;
use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{confirm, now_iso, show_toast};
use super::messages::Msg;
use super::state::{DialogMode, RosterDashboard, StudentDialog};
use crate::services::session;

pub fn update(component: &mut RosterDashboard, ctx: &Context<RosterDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(students) => {
            log!(format!("Fetched {} students", students.len()));
            component.reconciler.load(students);
            component.loading = false;
            log_snapshot(component);
            true
        }
        Msg::LoadFailed(e) => {
            component.loading = false;
            if !e.is_aborted() {
                error!(format!("Error fetching students: {}", e));
                show_toast("Could not load students.");
            }
            true
        }
        Msg::SetSearch(term) => {
            component.reconciler.set_search_term(term);
            true
        }
        Msg::ClearSearch => {
            component.reconciler.clear_search();
            true
        }
        Msg::SetFilter(filter) => {
            component.reconciler.set_filter(filter);
            component.filter_open = false;
            true
        }
        Msg::ToggleFilterMenu => {
            component.filter_open = !component.filter_open;
            component.profile_open = false;
            true
        }
        Msg::ToggleProfileMenu => {
            component.profile_open = !component.profile_open;
            component.filter_open = false;
            true
        }
        Msg::ToggleSidebar => {
            component.sidebar_collapsed = !component.sidebar_collapsed;
            true
        }
        Msg::SelectMenu(item) => {
            component.active_menu = item;
            true
        }
        Msg::NextPage => component.reconciler.next_page(),
        Msg::PrevPage => component.reconciler.prev_page(),
        Msg::OpenAdd => {
            component.dialog = Some(StudentDialog::add());
            true
        }
        Msg::OpenEdit(id) => match component.reconciler.roster().find(&id) {
            Some(student) => {
                component.dialog = Some(StudentDialog::edit(student.clone()));
                true
            }
            None => {
                warn!(format!("Student {} is no longer in the working set", id));
                false
            }
        },
        Msg::CloseDialog => {
            component.dialog = None;
            true
        }
        Msg::DraftChanged(field, value) => {
            if let Some(dialog) = component.dialog.as_mut() {
                dialog.draft.set(field, value);
                dialog.error = None;
            }
            true
        }
        Msg::SubmitDialog => {
            submit_dialog(component, ctx);
            true
        }
        Msg::Added(created) => {
            log!(format!(
                "Student added: {}",
                created.id_text().unwrap_or_default()
            ));
            component.reconciler.add(created);
            component.dialog = None;
            log_snapshot(component);
            show_toast("Student added.");
            true
        }
        Msg::Edited(updated) => {
            let id = updated.id_text().unwrap_or_default();
            if !component.reconciler.edit(updated) {
                warn!(format!("Updated student {} is not in the working set", id));
            }
            component.dialog = None;
            log_snapshot(component);
            show_toast("Student updated.");
            true
        }
        Msg::MutationFailed(e) => {
            if e.is_aborted() {
                return false;
            }
            error!(format!("Error saving student: {}", e));
            if let Some(dialog) = component.dialog.as_mut() {
                dialog.saving = false;
                dialog.error = Some(e.to_string());
            }
            show_toast(&failure_message(&e));
            true
        }
        Msg::RequestDelete(id) => {
            if !confirm("Delete this student?") {
                return false;
            }
            log!(format!("Deleting student {}", id));
            let link = ctx.link().clone();
            let remote = component.remote.clone();
            let signal = component.signal();
            spawn_local(async move {
                match remote.delete(&id, signal.as_ref()).await {
                    Ok(outcome) => link.send_message(Msg::Deleted(id, outcome)),
                    Err(e) => link.send_message(Msg::MutationFailed(e)),
                }
            });
            false
        }
        Msg::Deleted(id, outcome) => {
            component.reconciler.delete(&id, outcome);
            log_snapshot(component);
            show_toast("Student deleted.");
            true
        }
        Msg::Logout => {
            log!("Logging out");
            session::log_out();
            ctx.props().on_logout.emit(());
            false
        }
    }
}

/// Validates the dialog draft and sends it to the remote collection.
fn submit_dialog(component: &mut RosterDashboard, ctx: &Context<RosterDashboard>) {
    let link = ctx.link().clone();
    let remote = component.remote.clone();
    let signal = component.signal();

    let Some(dialog) = component.dialog.as_mut() else {
        return;
    };
    if dialog.saving {
        return;
    }
    if let Err(e) = dialog.draft.validate() {
        dialog.error = Some(e.to_string());
        return;
    }
    dialog.saving = true;
    dialog.error = None;
    let draft = dialog.draft.clone();

    match &dialog.mode {
        DialogMode::Add => {
            let student = draft.into_new_student(Some(now_iso()));
            spawn_local(async move {
                match remote.create(&student, signal.as_ref()).await {
                    Ok(created) => link.send_message(Msg::Added(created)),
                    Err(e) => link.send_message(Msg::MutationFailed(e)),
                }
            });
        }
        DialogMode::Edit(original) => {
            let Some(id) = original.id_text() else {
                dialog.saving = false;
                dialog.error = Some("This student has not been saved yet.".to_string());
                return;
            };
            let student = draft.apply_to(original.clone());
            spawn_local(async move {
                match remote.update(&id, &student, signal.as_ref()).await {
                    Ok(updated) => link.send_message(Msg::Edited(updated)),
                    Err(e) => link.send_message(Msg::MutationFailed(e)),
                }
            });
        }
    }
}

fn failure_message(e: &RemoteError) -> String {
    match e {
        RemoteError::Status { operation, status } => {
            format!("Could not {} student (status {}).", operation, status)
        }
        RemoteError::Transport { operation, .. } | RemoteError::Decode { operation, .. } => {
            format!("Could not {} student.", operation)
        }
        RemoteError::Aborted { .. } => String::new(),
    }
}

/// Debug-level dump of the working set, visible only with diagnostics on.
fn log_snapshot(component: &RosterDashboard) {
    if log::log_enabled!(log::Level::Debug) {
        let rows: Vec<String> = component
            .reconciler
            .roster()
            .entries()
            .iter()
            .map(|entry| format!("{} {}", entry.key, entry.student.firstname_text()))
            .collect();
        log::debug!("working set ({}): {:?}", rows.len(), rows);
    }
}
