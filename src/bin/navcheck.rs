//! Validate a shell config and print the navigation it renders.
//!
//! Run with: cargo run --features server --bin navcheck -- --preset apps --path /my-app

use anyhow::Context;
use clap::Parser;

use app_shell::cli::{NavcheckArgs, render_outline};
use app_shell::config::loader;
use app_shell::domain::services::resolve_selection;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = NavcheckArgs::parse();

    let source = loader::resolve_source(args.config, args.preset.as_deref())?;
    let config = loader::load(&source).with_context(|| format!("loading {:?}", source))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let selection = resolve_selection(&config.navigation, &args.path);
    print!("{}", render_outline(&config, &selection));
    Ok(())
}
