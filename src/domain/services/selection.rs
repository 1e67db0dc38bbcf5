//! Active navigation item derivation
//!
//! The current path comes from the router. Highlighting is visual only, the
//! page actually rendered is decided by route matching.

use crate::domain::models::{ItemRef, NavigationConfig};

/// Drop the query string and fragment from a path
pub fn normalize_path(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Item whose url is the longest prefix of `path`, across all sections.
/// Ties keep the first declared item. `selected` overrides are ignored here.
pub fn active_item(config: &NavigationConfig, path: &str) -> Option<ItemRef> {
    let path = normalize_path(path);
    if path.is_empty() {
        return None;
    }

    let mut best: Option<(ItemRef, usize)> = None;
    for (at, item) in config.items() {
        if !item.matches(path) {
            continue;
        }
        let len = item.url.len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((at, len));
        }
    }
    best.map(|(at, _)| at)
}

/// Per-section, per-item selected flags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    flags: Vec<Vec<bool>>,
    active: Option<ItemRef>,
}

impl Selection {
    pub fn is_selected(&self, at: ItemRef) -> bool {
        self.flags
            .get(at.section)
            .and_then(|items| items.get(at.item))
            .copied()
            .unwrap_or(false)
    }

    pub fn section_flags(&self, section: usize) -> Vec<bool> {
        self.flags.get(section).cloned().unwrap_or_default()
    }

    /// Item derived from the path, before overrides
    pub fn active(&self) -> Option<ItemRef> {
        self.active
    }

    pub fn selected_items(&self) -> Vec<ItemRef> {
        self.flags
            .iter()
            .enumerate()
            .flat_map(|(section, items)| {
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, selected)| **selected)
                    .map(move |(item, _)| ItemRef { section, item })
            })
            .collect()
    }
}

/// Explicit `selected` flags win, everything else follows [`active_item`]
pub fn resolve_selection(config: &NavigationConfig, path: &str) -> Selection {
    let active = active_item(config, path);

    let flags = config
        .sections
        .iter()
        .enumerate()
        .map(|(section, s)| {
            s.items
                .iter()
                .enumerate()
                .map(|(item, i)| {
                    i.selected
                        .unwrap_or(active == Some(ItemRef { section, item }))
                })
                .collect()
        })
        .collect();

    Selection { flags, active }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Icon, NavigationItem, NavigationSection, SubNavigationItem};

    fn at(section: usize, item: usize) -> ItemRef {
        ItemRef { section, item }
    }

    fn sales_channels() -> NavigationConfig {
        let mut my_app = NavigationItem::new("/my-app", "Generic App", Icon::Analytics);
        my_app.sub_navigation_items = vec![
            SubNavigationItem { url: "/my-app/page-1".into(), label: "Page 1".into() },
            SubNavigationItem { url: "/my-app/page-2".into(), label: "Page 2".into() },
        ];
        NavigationConfig {
            sections: vec![
                NavigationSection {
                    title: None,
                    items: vec![
                        NavigationItem::new("/", "Home", Icon::Home),
                        NavigationItem::new("/orders", "Orders", Icon::Orders),
                        NavigationItem::new("/products", "Products", Icon::Products),
                    ],
                },
                NavigationSection {
                    title: Some("Sales Channels".into()),
                    items: vec![
                        my_app,
                        NavigationItem::new("/online-store", "Online Store", Icon::Globe),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_normalize_path_strips_query_and_fragment() {
        assert_eq!(normalize_path("/orders?page=2"), "/orders");
        assert_eq!(normalize_path("/orders#top"), "/orders");
        assert_eq!(normalize_path("/orders"), "/orders");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_sub_page_highlights_parent_only() {
        let config = sales_channels();
        let selection = resolve_selection(&config, "/my-app/page-2");
        assert_eq!(selection.selected_items(), vec![at(1, 0)]);
    }

    #[test]
    fn test_longest_prefix_beats_root() {
        let config = sales_channels();
        assert_eq!(active_item(&config, "/orders/42"), Some(at(0, 1)));
        assert_eq!(active_item(&config, "/"), Some(at(0, 0)));
        // Only "/" is a prefix of an unknown page
        assert_eq!(active_item(&config, "/unknown"), Some(at(0, 0)));
    }

    #[test]
    fn test_empty_path_selects_nothing() {
        let config = sales_channels();
        let selection = resolve_selection(&config, "");
        assert!(selection.selected_items().is_empty());
        assert!(selection.active().is_none());
    }

    #[test]
    fn test_no_prefix_selects_nothing() {
        let config = NavigationConfig {
            sections: vec![NavigationSection {
                title: None,
                items: vec![NavigationItem::new("/orders", "Orders", Icon::Orders)],
            }],
        };
        assert_eq!(active_item(&config, "/products"), None);
        assert!(resolve_selection(&config, "/products").selected_items().is_empty());
    }

    #[test]
    fn test_active_item_is_longest_matching_url() {
        let config = sales_channels();
        let paths = ["/", "/orders", "/orders/1", "/my-app", "/my-app/page-1", "/online-store/themes", "/x"];
        for path in paths {
            let expected = config
                .items()
                .filter(|(_, item)| path.starts_with(item.url.as_str()))
                .map(|(_, item)| item.url.len())
                .max();
            let got = active_item(&config, path)
                .and_then(|at| config.item(at))
                .map(|item| item.url.len());
            assert_eq!(got, expected, "path {}", path);
        }
    }

    #[test]
    fn test_tie_keeps_first_declared() {
        let config = NavigationConfig {
            sections: vec![
                NavigationSection {
                    title: None,
                    items: vec![NavigationItem::new("/apps", "Apps", Icon::Apps)],
                },
                NavigationSection {
                    title: Some("Apps".into()),
                    items: vec![NavigationItem::new("/apps", "All apps", Icon::Apps)],
                },
            ],
        };
        assert_eq!(active_item(&config, "/apps/list"), Some(at(0, 0)));
    }

    #[test]
    fn test_exact_match_item_skipped_for_sub_paths() {
        let mut config = sales_channels();
        config.sections[0].items[0].exact_match = true;
        assert_eq!(active_item(&config, "/"), Some(at(0, 0)));
        assert_eq!(active_item(&config, "/unknown"), None);
    }

    #[test]
    fn test_selected_override_wins() {
        let mut config = sales_channels();
        config.sections[0].items[0].selected = Some(true);
        config.sections[1].items[0].selected = Some(false);

        let selection = resolve_selection(&config, "/my-app/page-1");
        assert!(selection.is_selected(at(0, 0)));
        assert!(!selection.is_selected(at(1, 0)));
        // Derivation itself still points at the matching item
        assert_eq!(selection.active(), Some(at(1, 0)));
    }

    #[test]
    fn test_section_flags_follow_declared_order() {
        let config = sales_channels();
        let selection = resolve_selection(&config, "/orders");
        assert_eq!(selection.section_flags(0), vec![false, true, false]);
        assert_eq!(selection.section_flags(1), vec![false, false]);
        assert!(selection.section_flags(5).is_empty());
    }

    #[test]
    fn test_static_override_without_path() {
        let mut config = sales_channels();
        config.sections[0].items[1].selected = Some(true);
        let selection = resolve_selection(&config, "");
        assert_eq!(selection.selected_items(), vec![at(0, 1)]);
    }

    #[test]
    fn test_query_string_ignored_for_matching() {
        let config = sales_channels();
        assert_eq!(active_item(&config, "/my-app?tab=1"), Some(at(1, 0)));
    }
}
