//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::config::ShellConfig;

/// Shell configuration installed at server startup
#[server]
pub async fn get_shell_config() -> Result<ShellConfig, ServerFnError> {
    use crate::config::loader;
    use crate::shared::logging::log_config_error;

    let config = loader::current().map_err(|e| {
        log_config_error(&e.to_string());
        ServerFnError::new(e.to_string())
    })?;

    Ok(config.clone())
}
