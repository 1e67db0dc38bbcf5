use std::collections::BTreeMap;

pub const TOGGLE_NAVIGATION: &str = "topBar.toggleNavigation";
pub const NAVIGATION_LABEL: &str = "navigation.label";
pub const CLOSE_NAVIGATION: &str = "frame.closeNavigation";
pub const SKIP_TO_CONTENT: &str = "frame.skipToContent";
pub const LOADING: &str = "frame.loading";
pub const CONFIG_ERROR: &str = "frame.configError";

/// Translation dictionary handed to the app provider. An empty dictionary
/// keeps every built-in English string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct I18n {
    messages: BTreeMap<String, String>,
}

impl I18n {
    pub fn new(messages: BTreeMap<String, String>) -> Self {
        Self { messages }
    }

    pub fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback(key).to_string())
    }
}

fn fallback(key: &str) -> &str {
    match key {
        TOGGLE_NAVIGATION => "Toggle menu",
        NAVIGATION_LABEL => "Main navigation",
        CLOSE_NAVIGATION => "Close navigation",
        SKIP_TO_CONTENT => "Skip to content",
        LOADING => "Loading...",
        CONFIG_ERROR => "Navigation unavailable",
        other => other,
    }
}
