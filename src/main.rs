//! App Shell - Main Entry Point
//!
//! Loads the shell config, then serves the Dioxus application.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use app_shell::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use app_shell::cli::ServerArgs;
    use app_shell::config::loader;
    use app_shell::shared::logging::log_config_error;
    use clap::Parser;
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServerArgs::parse();

    tracing::info!("Starting App Shell...");

    let config = match loader::resolve_source(args.config, args.preset.as_deref())
        .and_then(|source| loader::load(&source))
    {
        Ok(config) => config,
        Err(e) => {
            log_config_error(&e.to_string());
            std::process::exit(1);
        }
    };
    loader::install(config);

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App).layer(TraceLayer::new_for_http());
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] App Shell - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
