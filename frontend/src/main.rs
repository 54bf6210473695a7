use crate::app::App;

mod app;
mod components;
mod config;
mod services;
mod tops_sheet;

fn main() {
    services::console_log::init(config::diagnostics_enabled());
    yew::Renderer::<App>::new().render();
}
