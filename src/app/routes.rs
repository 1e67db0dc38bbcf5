use dioxus::prelude::*;

use crate::app::layouts::Shell;
use crate::app::pages::{Home, Page};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},

    // Every other path; navigation urls come from config
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("App shell initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
