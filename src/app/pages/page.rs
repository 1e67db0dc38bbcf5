use dioxus::prelude::*;

use crate::app::components::Card;
use crate::config::ShellConfig;

/// Placeholder content for every configured navigation url
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    // Absent while the shell is still loading or failed to load
    let config = try_use_context::<ShellConfig>();

    let title = page_title(config.as_ref(), &path, &segments);

    rsx! {
        Card { title, subtitle: path.clone(),
            p { class: "c-page__placeholder", "Content for {path} goes here." }
        }
    }
}

/// Navigation label for the path, falling back to the last segment
fn page_title(config: Option<&ShellConfig>, path: &str, segments: &[String]) -> String {
    config
        .and_then(|config| config.label_for(path))
        .map(String::from)
        .unwrap_or_else(|| page_title_from_segments(segments))
}

/// "my-app/page-2" -> "Page 2"
fn page_title_from_segments(segments: &[String]) -> String {
    let Some(last) = segments.iter().rev().find(|s| !s.is_empty()) else {
        return "Untitled".to_string();
    };

    last.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_page_title_prefers_navigation_label() {
        let config = Preset::SalesChannels.load().unwrap();
        let parts = segments(&["online-store"]);
        assert_eq!(page_title(Some(&config), "/online-store", &parts), "Online Store");
        assert_eq!(page_title(Some(&config), "/my-app/page-2", &segments(&["my-app", "page-2"])), "Page 2");
        assert_eq!(page_title(Some(&config), "/unlisted-page", &segments(&["unlisted-page"])), "Unlisted Page");
        assert_eq!(page_title(None, "/orders", &segments(&["orders"])), "Orders");
    }

    #[test]
    fn test_page_reads_title_from_provided_config() {
        let mut config = Preset::SalesChannels.load().unwrap();
        config.navigation.sections[0].items[1].label = "All orders".into();

        let mut dom = VirtualDom::new_with_props(Page, PageProps { segments: segments(&["orders"]) })
            .with_root_context(config);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("All orders"), "{}", html);
        assert!(html.contains("Content for /orders goes here."));
    }

    #[test]
    fn test_page_without_config_uses_segment_title() {
        let mut dom = VirtualDom::new_with_props(Page, PageProps { segments: segments(&["my-app", "page-1"]) });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Page 1"), "{}", html);
    }

    #[test]
    fn test_page_title_from_segments() {
        assert_eq!(page_title_from_segments(&segments(&["my-app", "page-2"])), "Page 2");
        assert_eq!(page_title_from_segments(&segments(&["online_store"])), "Online Store");
        assert_eq!(page_title_from_segments(&segments(&["orders", ""])), "Orders");
        assert_eq!(page_title_from_segments(&[]), "Untitled");
    }
}
