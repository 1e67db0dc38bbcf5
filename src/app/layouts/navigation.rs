use dioxus::prelude::*;

use crate::domain::models::{NavigationConfig, NavigationItem, NavigationSection};
use crate::domain::services::resolve_selection;
use crate::shared::hooks::use_i18n;
use crate::shared::i18n::NAVIGATION_LABEL;
use crate::shared::logging::log_navigation_resolved;

/// Side navigation. Sections and items render in declared order; the item
/// matching `location` is highlighted.
#[component]
pub fn Navigation(
    config: NavigationConfig,
    location: String,
    on_item_select: EventHandler<()>,
) -> Element {
    let nav_label = use_i18n().translate(NAVIGATION_LABEL);

    let selection = resolve_selection(&config, &location);
    log_navigation_resolved(
        &location,
        selection
            .active()
            .and_then(|at| config.item(at))
            .map(|item| item.url.as_str()),
        selection.selected_items().len(),
    );

    let sections: Vec<(NavigationSection, Vec<bool>)> = config
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| (section.clone(), selection.section_flags(index)))
        .collect();

    rsx! {
        nav { class: "c-navigation", aria_label: "{nav_label}",
            for (index, (section, selected)) in sections.into_iter().enumerate() {
                NavigationSectionView {
                    key: "{index}",
                    section,
                    selected,
                    on_item_select,
                }
            }
        }
    }
}

#[component]
fn NavigationSectionView(
    section: NavigationSection,
    selected: Vec<bool>,
    on_item_select: EventHandler<()>,
) -> Element {
    let NavigationSection { title, items } = section;

    rsx! {
        div { class: "c-navigation__section",
            if let Some(title) = title {
                h2 { class: "c-navigation__section-title", "{title}" }
            }
            ul { class: "c-navigation__items",
                for (index, (item, is_selected)) in items.into_iter().zip(selected).enumerate() {
                    NavigationItemView {
                        key: "{index}",
                        item,
                        selected: is_selected,
                        on_item_select,
                    }
                }
            }
        }
    }
}

#[component]
fn NavigationItemView(
    item: NavigationItem,
    selected: bool,
    on_item_select: EventHandler<()>,
) -> Element {
    let item_class = if selected {
        "c-navigation__item c-navigation__item--selected"
    } else {
        "c-navigation__item"
    };
    let aria_current = if selected { "page" } else { "false" };
    let glyph = item.icon.glyph();
    let icon_name = item.icon.as_str();
    let label = item.label.clone();

    // Sub items expand under the selected parent and are never highlighted
    let sub_items = if selected {
        item.sub_navigation_items.clone()
    } else {
        Vec::new()
    };

    rsx! {
        li { class: "c-navigation__list-item",
            Link {
                to: item.url.clone(),
                class: "{item_class}",
                "aria-current": aria_current,
                onclick: move |_| on_item_select.call(()),
                span { class: "c-navigation__icon", "data-icon": "{icon_name}", "{glyph}" }
                span { class: "c-navigation__label", "{label}" }
                if let Some(badge) = item.badge.clone() {
                    span { class: "c-navigation__badge", "{badge}" }
                }
            }

            if !sub_items.is_empty() {
                ul { class: "c-navigation__sub-items",
                    for sub in sub_items {
                        li { key: "{sub.url}",
                            Link {
                                to: sub.url.clone(),
                                class: "c-navigation__sub-item",
                                onclick: move |_| on_item_select.call(()),
                                "{sub.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
