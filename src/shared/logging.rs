//! Structured logging for the application shell
//!
//! Keeps field names consistent between the server (config loading) and the
//! client (navigation state changes).

use std::path::Path;

use crate::domain::services::MobileNavState;

/// Operation tag attached to every shell log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ConfigLoad,
    NavigationResolve,
    MobileNavigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ConfigLoad => "config_load",
            LogOperation::NavigationResolve => "navigation_resolve",
            LogOperation::MobileNavigation => "mobile_navigation",
        }
    }
}

/// Log a config file being read
pub fn log_config_file(path: &Path) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        path = %path.display(),
        "Loading shell config file"
    );
}

/// Log a bundled preset being used
pub fn log_config_preset(preset: &str) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        preset = preset,
        "Using bundled navigation preset"
    );
}

/// Log the loaded configuration summary
pub fn log_config_loaded(app_name: &str, section_count: usize, item_count: usize) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        app_name = app_name,
        section_count = section_count,
        item_count = item_count,
        "Shell config loaded"
    );
}

pub fn log_config_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ConfigLoad.as_str(),
        error = error,
        "Failed to load shell config"
    );
}

/// Log which item the current path highlights
pub fn log_navigation_resolved(path: &str, active: Option<&str>, selected_count: usize) {
    tracing::trace!(
        operation = LogOperation::NavigationResolve.as_str(),
        path = path,
        active = active.unwrap_or("-"),
        selected_count = selected_count,
        "Resolved navigation selection"
    );
}

/// Log a mobile navigation transition
pub fn log_mobile_nav_transition(trigger: &str, from: MobileNavState, to: MobileNavState) {
    tracing::debug!(
        operation = LogOperation::MobileNavigation.as_str(),
        trigger = trigger,
        from = from.as_str(),
        to = to.as_str(),
        "Mobile navigation transition"
    );
}
