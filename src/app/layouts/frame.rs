use dioxus::prelude::*;

use crate::shared::hooks::use_i18n;
use crate::shared::i18n::{CLOSE_NAVIGATION, SKIP_TO_CONTENT};

/// Page frame: top bar, navigation panel and the main content area.
///
/// On narrow viewports the panel is hidden unless `show_mobile_navigation`
/// is set; clicking the backdrop or the close button raises
/// `on_navigation_dismiss`.
#[component]
pub fn Frame(
    top_bar: Element,
    navigation: Element,
    show_mobile_navigation: bool,
    on_navigation_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    let i18n = use_i18n();
    let skip_label = i18n.translate(SKIP_TO_CONTENT);
    let close_label = i18n.translate(CLOSE_NAVIGATION);

    let frame_class = if show_mobile_navigation {
        "c-frame c-frame--nav-open"
    } else {
        "c-frame"
    };

    rsx! {
        div { class: "{frame_class}",
            a { class: "c-frame__skip", href: "#main-content", "{skip_label}" }

            header { class: "c-frame__top-bar",
                {top_bar}
            }

            div { class: "c-frame__body",
                div { class: "c-frame__navigation",
                    button {
                        class: "c-frame__close",
                        r#type: "button",
                        aria_label: "{close_label}",
                        onclick: move |_| on_navigation_dismiss.call(()),
                        "✕"
                    }
                    {navigation}
                }

                if show_mobile_navigation {
                    div {
                        class: "c-frame__backdrop",
                        onclick: move |_| on_navigation_dismiss.call(()),
                    }
                }

                main { id: "main-content", class: "c-frame__main",
                    {children}
                }
            }
        }
    }
}
