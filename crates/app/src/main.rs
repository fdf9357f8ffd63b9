use client::Controller;
use dioxus::prelude::*;

pub mod format_helpers;
pub mod notify;
mod routes;
mod state;

use state::AppContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app = use_context_provider(|| {
        let config = client::config::load_config();
        tracing::info!(api = %config.base_url(), "starting library client");
        AppContext::new(Controller::from_config(&config))
    });

    // Resolve the starting page from the persisted session once.
    use_hook(move || app.start());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        routes::Shell {}
    }
}
