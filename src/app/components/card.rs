use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "c-card",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h1 {
                        class: "c-card__title",
                        "{title}"
                    }
                    if let Some(subtitle) = subtitle {
                        p {
                            class: "c-card__subtitle",
                            "{subtitle}"
                        }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
