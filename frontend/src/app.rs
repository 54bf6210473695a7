use yew::{html, Component, Context, Html};

use crate::components::roster::RosterDashboard;
use crate::services::session;

pub enum Msg {
    SignIn,
    SignedOut,
}

/// Shows the dashboard while the session flag is set, a sign-in card otherwise.
pub struct App {
    signed_in: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            signed_in: session::is_logged_in(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SignIn => {
                session::log_in();
                self.signed_in = true;
            }
            Msg::SignedOut => self.signed_in = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.signed_in {
            html! {
                <RosterDashboard on_logout={link.callback(|_| Msg::SignedOut)} />
            }
        } else {
            html! {
                <div class="sign-in">
                    <div class="card">
                        <h2>{ "Student Roster" }</h2>
                        <button class="btn primary" onclick={link.callback(|_| Msg::SignIn)}>
                            { "Sign in" }
                        </button>
                    </div>
                </div>
            }
        }
    }
}
