use common::requests::DraftField;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::roster::{Msg, RosterDashboard};
use crate::tops_sheet::top_sheet::TopSheet;

/// Add/edit form. The sheet stays mounted; with no dialog it is rendered closed.
pub fn student_form(component: &RosterDashboard, link: &Scope<RosterDashboard>) -> Html {
    let Some(dialog) = component.dialog.as_ref() else {
        return html! {
            <TopSheet open={false} title={String::new()} on_close={link.callback(|_| Msg::CloseDialog)} />
        };
    };

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitDialog
    });

    let fields = DraftField::ALL
        .iter()
        .map(|&field| {
            html! {
                <label class="form-field" key={field.name()}>
                    <span>{ field.label() }</span>
                    <input
                        name={field.name()}
                        type={field.input_type()}
                        value={dialog.draft.get(field).to_string()}
                        disabled={dialog.saving}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::DraftChanged(field, input.value())
                        })}
                    />
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <TopSheet
            open={true}
            title={dialog.title().to_string()}
            on_close={link.callback(|_| Msg::CloseDialog)}
        >
            <form class="student-form" {onsubmit}>
                { fields }
                {
                    match &dialog.error {
                        Some(error) => html! { <p class="form-error">{ error.clone() }</p> },
                        None => html! {},
                    }
                }
                <div class="form-actions">
                    <button type="button" class="btn secondary" onclick={link.callback(|_| Msg::CloseDialog)}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn primary" disabled={dialog.saving}>
                        { if dialog.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </TopSheet>
    }
}
