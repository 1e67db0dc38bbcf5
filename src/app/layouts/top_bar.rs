use dioxus::prelude::*;

use crate::shared::hooks::use_i18n;
use crate::shared::i18n::TOGGLE_NAVIGATION;

#[component]
pub fn TopBar(
    app_name: String,
    #[props(default = true)] show_navigation_toggle: bool,
    #[props(default)] navigation_open: bool,
    on_navigation_toggle: EventHandler<()>,
) -> Element {
    let toggle_label = use_i18n().translate(TOGGLE_NAVIGATION);
    let expanded = if navigation_open { "true" } else { "false" };

    rsx! {
        nav { class: "c-top-bar",
            if show_navigation_toggle {
                button {
                    class: "c-top-bar__toggle",
                    r#type: "button",
                    aria_label: "{toggle_label}",
                    "aria-expanded": expanded,
                    onclick: move |_| on_navigation_toggle.call(()),
                    "☰"
                }
            }

            Link { to: "/", class: "c-top-bar__logo",
                "{app_name}"
            }
        }
    }
}
