//! Command line arguments and text output for the native binaries

use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;

use crate::config::ShellConfig;
use crate::domain::models::ItemRef;
use crate::domain::services::Selection;

/// Server options; each falls back to its environment variable
#[derive(Debug, Parser)]
#[command(name = "app-shell")]
#[command(about = "Serve the application shell")]
pub struct ServerArgs {
    /// JSON shell config file
    #[arg(long, env = "APP_SHELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bundled navigation preset (sales-channels, apps)
    #[arg(long, env = "APP_SHELL_PRESET")]
    pub preset: Option<String>,
}

#[derive(Debug, Parser)]
#[command(name = "navcheck")]
#[command(about = "Validate a shell config and show the navigation it renders")]
pub struct NavcheckArgs {
    /// JSON shell config file
    #[arg(long, env = "APP_SHELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bundled navigation preset (sales-channels, apps)
    #[arg(long, env = "APP_SHELL_PRESET")]
    pub preset: Option<String>,

    /// Current path used to highlight the active item
    #[arg(long, default_value = "")]
    pub path: String,

    /// Print the resolved config as JSON instead of the outline
    #[arg(long)]
    pub json: bool,
}

/// Text outline of the navigation, `*` marking selected items
pub fn render_outline(config: &ShellConfig, selection: &Selection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", config.app_name, config.lang);

    for (section_index, section) in config.navigation.sections.iter().enumerate() {
        let _ = writeln!(out);
        if let Some(title) = &section.title {
            let _ = writeln!(out, "{}", title);
        }
        for (item_index, item) in section.items.iter().enumerate() {
            let at = ItemRef {
                section: section_index,
                item: item_index,
            };
            let marker = if selection.is_selected(at) { '*' } else { ' ' };
            let _ = write!(out, "  [{}] {} {} {}", marker, item.icon.glyph(), item.label, item.url);
            if let Some(badge) = &item.badge {
                let _ = write!(out, " ({})", badge);
            }
            let _ = writeln!(out);
            for sub in &item.sub_navigation_items {
                let _ = writeln!(out, "        - {} {}", sub.label, sub.url);
            }
        }
    }
    out
}
