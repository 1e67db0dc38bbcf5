use dioxus::prelude::*;

use crate::config::{ColorScheme, HeadLink};

/// Document head for the shell: metadata, configured links and the bundled
/// stylesheet. `<html lang>` and the color scheme class are applied once the
/// client is running.
#[component]
pub fn DocumentHead(
    app_name: String,
    lang: String,
    color_scheme: ColorScheme,
    head_links: Vec<HeadLink>,
) -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_effect(move || {
        let lang = lang.clone();
        spawn(async move {
            apply_document_attributes(lang, color_scheme).await;
        });
    });

    rsx! {
        document::Title { "{app_name}" }
        document::Meta { charset: "utf-8" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1"
        }
        for link in head_links {
            if let Some(cross_origin) = link.cross_origin {
                document::Link {
                    rel: link.rel,
                    href: link.href,
                    crossorigin: cross_origin
                }
            } else {
                document::Link {
                    rel: link.rel,
                    href: link.href
                }
            }
        }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
    }
}

/// Script that sets `<html lang>` and the color scheme class. Values are
/// embedded as JSON string literals.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn document_attributes_script(lang: &str, color_scheme: ColorScheme) -> String {
    format!(
        r#"
        (function() {{
            const root = document.documentElement;
            root.lang = {};
            root.classList.remove('light', 'dark');
            root.classList.add({});
        }})()
    "#,
        serde_json::Value::from(lang),
        serde_json::Value::from(color_scheme.as_str()),
    )
}

#[cfg(target_arch = "wasm32")]
async fn apply_document_attributes(lang: String, color_scheme: ColorScheme) {
    let script = document_attributes_script(&lang, color_scheme);
    if let Err(e) = document::eval(&script).await {
        tracing::warn!(lang = %lang, error = %e, "Failed to apply document attributes");
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn apply_document_attributes(_lang: String, _color_scheme: ColorScheme) {
    // No-op on server
}
