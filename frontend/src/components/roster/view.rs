//! View rendering for the roster dashboard.
//!
//! Layout: collapsible sidebar on the left, header with the profile menu,
//! then the toolbar (search, filter, add), the student table and the pager.
//! The table body is whatever `Reconciler::page_view` returns for the current
//! view state; nothing here filters or sorts on its own.

use common::model::student::Student;
use common::pipeline::{FilterField, PageView};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::student_form::student_form;
use super::helpers::format_date;
use super::messages::Msg;
use super::state::{RosterDashboard, MENU_ITEMS};

const COLUMNS: [&str; 8] = [
    "First Name",
    "Last Name",
    "Age",
    "Phone",
    "Email",
    "Role",
    "Date",
    "Actions",
];

pub fn view(component: &RosterDashboard, ctx: &Context<RosterDashboard>) -> Html {
    let link = ctx.link();
    let page = component.reconciler.page_view(&component.collator);

    html! {
        <div class={classes!("layout", component.sidebar_collapsed.then_some("collapsed"))}>
            { build_sidebar(component, link) }
            <main class="content">
                { build_header(component, link) }
                <section class="card">
                    { build_toolbar(component, link) }
                    { build_table(component, link, &page) }
                    { build_pager(link, &page) }
                </section>
            </main>
            { student_form(component, link) }
        </div>
    }
}

fn build_sidebar(component: &RosterDashboard, link: &Scope<RosterDashboard>) -> Html {
    let items = MENU_ITEMS
        .iter()
        .map(|&(label, icon)| {
            let active = component.active_menu == label;
            html! {
                <li
                    class={classes!("menu-item", active.then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectMenu(label))}
                >
                    <i class="material-icons">{ icon }</i>
                    <span class="menu-label">{ label }</span>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <aside class="sidebar">
            <button class="icon-btn" title="Toggle menu" onclick={link.callback(|_| Msg::ToggleSidebar)}>
                <i class="material-icons">{ "menu" }</i>
            </button>
            <ul class="menu">{ items }</ul>
        </aside>
    }
}

fn build_header(component: &RosterDashboard, link: &Scope<RosterDashboard>) -> Html {
    html! {
        <header class="header">
            <h2>{ "Students" }</h2>
            <div class="dropdown">
                <button class="icon-btn" title="Profile" onclick={link.callback(|_| Msg::ToggleProfileMenu)}>
                    <i class="material-icons">{ "account_circle" }</i>
                </button>
                if component.profile_open {
                    <ul class="dropdown-menu right">
                        <li onclick={link.callback(|_| Msg::Logout)}>
                            <i class="material-icons">{ "logout" }</i>
                            { "Logout" }
                        </li>
                    </ul>
                }
            </div>
        </header>
    }
}

fn build_toolbar(component: &RosterDashboard, link: &Scope<RosterDashboard>) -> Html {
    let view = component.reconciler.view();
    let selected = view.filter();

    let options = FilterField::OPTIONS
        .iter()
        .map(|&field| {
            html! {
                <li
                    class={classes!((field == selected).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetFilter(field))}
                >
                    { field.label() }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="toolbar">
            <div class="search">
                <i class="material-icons">{ "search" }</i>
                <input
                    type="text"
                    placeholder={format!("Search by {}", selected.label().to_lowercase())}
                    value={view.search_term().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearch(input.value())
                    })}
                />
                if view.is_searching() {
                    <button class="icon-btn" title="Clear" onclick={link.callback(|_| Msg::ClearSearch)}>
                        <i class="material-icons">{ "close" }</i>
                    </button>
                }
            </div>
            <div class="dropdown">
                <button class="btn secondary" onclick={link.callback(|_| Msg::ToggleFilterMenu)}>
                    <i class="material-icons">{ "filter_list" }</i>
                    { selected.label() }
                </button>
                if component.filter_open {
                    <ul class="dropdown-menu">{ options }</ul>
                }
            </div>
            <button class="btn primary" onclick={link.callback(|_| Msg::OpenAdd)}>
                <i class="material-icons">{ "add" }</i>
                { "Add Student" }
            </button>
        </div>
    }
}

fn build_table(component: &RosterDashboard, link: &Scope<RosterDashboard>, page: &PageView<'_>) -> Html {
    let header = COLUMNS
        .iter()
        .map(|&title| html! { <th>{ title }</th> })
        .collect::<Html>();

    let body = if component.loading {
        html! {
            <tr><td class="placeholder" colspan={COLUMNS.len().to_string()}>{ "Loading..." }</td></tr>
        }
    } else if page.rows.is_empty() {
        html! {
            <tr>
                <td class="placeholder" colspan={COLUMNS.len().to_string()}>
                    { "No students found matching your criteria." }
                </td>
            </tr>
        }
    } else {
        page.rows.iter().map(|&student| build_row(student, link)).collect::<Html>()
    };

    html! {
        <table class="students">
            <thead><tr>{ header }</tr></thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn build_row(student: &Student, link: &Scope<RosterDashboard>) -> Html {
    let actions = match student.id_text() {
        Some(id) => {
            let edit_id = id.clone();
            html! {
                <>
                    <button class="icon-btn" title="Edit" onclick={link.callback(move |_| Msg::OpenEdit(edit_id.clone()))}>
                        <i class="material-icons">{ "edit" }</i>
                    </button>
                    <button class="icon-btn danger" title="Delete" onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}>
                        <i class="material-icons">{ "delete" }</i>
                    </button>
                </>
            }
        }
        // Records without an id cannot be addressed remotely.
        None => html! {},
    };

    html! {
        <tr>
            <td>{ student.firstname_text() }</td>
            <td>{ student.lastname_text() }</td>
            <td>{ student.age_text() }</td>
            <td>{ student.phone_text() }</td>
            <td>{ student.mail_text() }</td>
            <td>{ student.role_text() }</td>
            <td>{ format_date(student.date.as_deref()) }</td>
            <td class="actions">{ actions }</td>
        </tr>
    }
}

fn build_pager(link: &Scope<RosterDashboard>, page: &PageView<'_>) -> Html {
    html! {
        <div class="pager">
            <button class="btn secondary" disabled={!page.has_prev()} onclick={link.callback(|_| Msg::PrevPage)}>
                { "Previous" }
            </button>
            <span>{ format!("Page {} of {}", page.current_page, page.total_pages) }</span>
            <button class="btn secondary" disabled={!page.has_next()} onclick={link.callback(|_| Msg::NextPage)}>
                { "Next" }
            </button>
        </div>
    }
}
