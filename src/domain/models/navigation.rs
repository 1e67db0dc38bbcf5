use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Icon;
use crate::shared::errors::{AppError, Result};

/// Nested link shown under a navigation item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubNavigationItem {
    pub url: String,
    pub label: String,
}

/// One clickable entry of the side navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub url: String,
    pub label: String,
    pub icon: Icon,
    /// Explicit override of the path-derived selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Only an identical path activates the item
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exact_match: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_navigation_items: Vec<SubNavigationItem>,
}

impl NavigationItem {
    pub fn new(url: impl Into<String>, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            icon,
            selected: None,
            exact_match: false,
            badge: None,
            sub_navigation_items: Vec::new(),
        }
    }

    /// Whether `path` activates this item, ignoring the `selected` override
    pub fn matches(&self, path: &str) -> bool {
        if self.exact_match {
            path == self.url
        } else {
            path.starts_with(self.url.as_str())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<NavigationItem>,
}

/// Ordered sections making up the side navigation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationConfig {
    pub sections: Vec<NavigationSection>,
}

impl NavigationConfig {
    /// Check label and url invariants. Urls must be unique within a section,
    /// duplicates across sections are allowed.
    pub fn validate(&self) -> Result<()> {
        for (section_index, section) in self.sections.iter().enumerate() {
            let section_name = section
                .title
                .clone()
                .unwrap_or_else(|| format!("#{}", section_index));

            if matches!(&section.title, Some(title) if title.trim().is_empty()) {
                return Err(AppError::InvalidNavigation(format!(
                    "section {} has a blank title",
                    section_name
                )));
            }

            let mut seen = HashSet::new();
            for item in &section.items {
                check_link(&section_name, &item.url, &item.label)?;

                if !seen.insert(item.url.as_str()) {
                    return Err(AppError::InvalidNavigation(format!(
                        "section {}: duplicate url {}",
                        section_name, item.url
                    )));
                }

                for sub in &item.sub_navigation_items {
                    check_link(&section_name, &sub.url, &sub.label)?;
                }
            }
        }
        Ok(())
    }

    /// Iterate every item with its (section, item) position
    pub fn items(&self) -> impl Iterator<Item = (ItemRef, &NavigationItem)> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section, s)| {
                s.items
                    .iter()
                    .enumerate()
                    .map(move |(item, i)| (ItemRef { section, item }, i))
            })
    }

    pub fn item(&self, at: ItemRef) -> Option<&NavigationItem> {
        self.sections.get(at.section)?.items.get(at.item)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Position of an item inside a [`NavigationConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub section: usize,
    pub item: usize,
}

fn check_link(section: &str, url: &str, label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(AppError::InvalidNavigation(format!(
            "section {}: item {} has an empty label",
            section, url
        )));
    }
    if !url.starts_with('/') {
        return Err(AppError::InvalidNavigation(format!(
            "section {}: url {:?} of {} must start with '/'",
            section, url, label
        )));
    }
    Ok(())
}
