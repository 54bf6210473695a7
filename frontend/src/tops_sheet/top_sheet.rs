use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Full-screen sheet sliding in from the top, used for the add/edit dialog.
///
/// The sheet is always mounted so the `show` class can animate in and out
/// (see `.top-sheet` in `index.html`). Clicking the backdrop or the close
/// button emits `on_close`; the parent decides whether to actually close.
pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_button = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        // Clicks inside the panel must not reach the backdrop.
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                aria-hidden={(!props.open).to_string()}
                onclick={on_backdrop}
            >
                <div class="top-sheet-panel" onclick={stop}>
                    <div class="top-sheet-header">
                        <h3>{ props.title.clone() }</h3>
                        <button class="icon-btn" title="Close" onclick={on_close_button}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
