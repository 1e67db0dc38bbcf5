//! Shell configuration
//!
//! Everything that differs between deployments of the shell: navigation
//! sections, document head links, i18n strings and the dismiss behavior.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::models::NavigationConfig;
use crate::domain::services::DismissBehavior;
use crate::shared::errors::{AppError, Result};

// Server-only: file loading and the process-wide config cell
#[cfg(not(target_arch = "wasm32"))]
pub mod loader;

const SALES_CHANNELS_JSON: &str = include_str!("../../presets/sales-channels.json");
const APPS_JSON: &str = include_str!("../../presets/apps.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// `<link>` element emitted in the document head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadLink {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<String>,
}

impl HeadLink {
    fn new(rel: &str, href: &str, cross_origin: Option<&str>) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
            cross_origin: cross_origin.map(String::from),
        }
    }
}

/// Inter font preconnects and stylesheet
pub fn default_head_links() -> Vec<HeadLink> {
    vec![
        HeadLink::new("preconnect", "https://fonts.googleapis.com", None),
        HeadLink::new("preconnect", "https://fonts.gstatic.com", Some("anonymous")),
        HeadLink::new(
            "stylesheet",
            "https://fonts.googleapis.com/css2?family=Inter:ital,opsz,wght@0,14..32,100..900;1,14..32,100..900&display=swap",
            None,
        ),
    ]
}

fn default_app_name() -> String {
    "App".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub i18n: BTreeMap<String, String>,
    #[serde(default = "default_head_links")]
    pub head_links: Vec<HeadLink>,
    #[serde(default)]
    pub dismiss_behavior: DismissBehavior,
    pub navigation: NavigationConfig,
}

impl ShellConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.navigation.validate()?;
        Ok(config)
    }

    /// Label of the navigation entry (or sub entry) whose url equals `path`
    pub fn label_for(&self, path: &str) -> Option<&str> {
        self.navigation.items().find_map(|(_, item)| {
            if item.url == path {
                return Some(item.label.as_str());
            }
            item.sub_navigation_items
                .iter()
                .find(|sub| sub.url == path)
                .map(|sub| sub.label.as_str())
        })
    }
}

/// Navigation variants bundled with the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Selection derived from the current path
    #[default]
    SalesChannels,
    /// Selection hardcoded with `selected` flags
    Apps,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::SalesChannels, Preset::Apps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::SalesChannels => "sales-channels",
            Preset::Apps => "apps",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Preset::SalesChannels => SALES_CHANNELS_JSON,
            Preset::Apps => APPS_JSON,
        }
    }

    pub fn load(&self) -> Result<ShellConfig> {
        ShellConfig::from_json(self.source())
    }
}

impl FromStr for Preset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| AppError::UnknownPreset(s.to_string()))
    }
}
