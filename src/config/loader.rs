//! Config source resolution and the process-wide config cell

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use super::{Preset, ShellConfig};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_config_file, log_config_loaded, log_config_preset};

pub const CONFIG_ENV: &str = "APP_SHELL_CONFIG";
pub const PRESET_ENV: &str = "APP_SHELL_PRESET";

static CONFIG: OnceCell<ShellConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Preset(Preset),
}

/// `~/.config/app-shell/shell.json` (platform config dir)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("app-shell").join("shell.json"))
}

/// Explicit file, then explicit preset, then the user config file, then the
/// default preset
pub fn resolve_source(config: Option<PathBuf>, preset: Option<&str>) -> Result<ConfigSource> {
    if let Some(path) = config {
        return Ok(ConfigSource::File(path));
    }
    if let Some(name) = preset {
        return Ok(ConfigSource::Preset(name.parse()?));
    }
    if let Some(path) = user_config_path().filter(|p| p.is_file()) {
        return Ok(ConfigSource::File(path));
    }
    Ok(ConfigSource::Preset(Preset::default()))
}

pub fn load_file(path: &Path) -> Result<ShellConfig> {
    log_config_file(path);
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    ShellConfig::from_json(&json)
}

pub fn load(source: &ConfigSource) -> Result<ShellConfig> {
    let config = match source {
        ConfigSource::File(path) => load_file(path)?,
        ConfigSource::Preset(preset) => {
            log_config_preset(preset.as_str());
            preset.load()?
        }
    };
    log_config_loaded(
        &config.app_name,
        config.navigation.sections.len(),
        config.navigation.item_count(),
    );
    Ok(config)
}

/// Install the config for the rest of the process. Returns false when a
/// config was already installed.
pub fn install(config: ShellConfig) -> bool {
    let installed = CONFIG.set(config).is_ok();
    if !installed {
        tracing::warn!("Shell config already installed, keeping the first one");
    }
    installed
}

/// Installed config, or one resolved from the environment on first use
pub fn current() -> Result<&'static ShellConfig> {
    CONFIG.get_or_try_init(|| {
        let config = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let preset = std::env::var(PRESET_ENV).ok();
        load(&resolve_source(config, preset.as_deref())?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("app-shell-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_explicit_file_wins() {
        let source = resolve_source(Some(PathBuf::from("/etc/shell.json")), Some("apps")).unwrap();
        assert_eq!(source, ConfigSource::File(PathBuf::from("/etc/shell.json")));
    }

    #[test]
    fn test_preset_source() {
        let source = resolve_source(None, Some("apps")).unwrap();
        assert_eq!(source, ConfigSource::Preset(Preset::Apps));
        assert!(matches!(resolve_source(None, Some("nope")), Err(AppError::UnknownPreset(_))));
    }

    #[test]
    fn test_load_file() {
        let path = temp_file(
            "ok.json",
            r#"{ "appName": "Shop", "navigation": { "sections": [ { "title": "Apps", "items": [
                { "url": "/apps", "label": "Apps", "icon": "apps" }
            ] } ] } }"#,
        );
        let config = load(&ConfigSource::File(path.clone())).unwrap();
        assert_eq!(config.app_name, "Shop");
        assert_eq!(config.navigation.item_count(), 1);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_file(Path::new("/definitely/not/here/shell.json")).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here/shell.json"));
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("app-shell/shell.json"));
        }
    }
}
