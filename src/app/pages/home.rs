use dioxus::prelude::*;

use crate::app::components::Card;

#[component]
pub fn Home() -> Element {
    rsx! {
        Card { title: "Home".to_string(),
            p { "Pick a section from the navigation to get started." }
        }
    }
}
