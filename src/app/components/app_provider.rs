use dioxus::prelude::*;
use std::collections::BTreeMap;

use crate::shared::i18n::I18n;

/// Root provider for the shell. Makes the translation dictionary available
/// to every component below it.
#[component]
pub fn AppProvider(
    #[props(default)] i18n: BTreeMap<String, String>,
    children: Element,
) -> Element {
    use_context_provider(|| I18n::new(i18n.clone()));

    rsx! {
        div { class: "c-app",
            {children}
        }
    }
}
