use anyhow::Context as _;
use clap::Parser;
use jsref_core::{config::Config, Catalog, UserState};

mod cli;
mod commands;
mod render;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/jsref-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("jsref debug log started — tail -f /tmp/jsref-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "config unavailable, using built-in defaults");
            Config::defaults()
        }),
    };

    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let state = match cli.state.as_ref().or(config.user.state_path.as_ref()) {
        Some(path) => UserState::load_or_default(path)
            .with_context(|| format!("failed to load user state from {}", path.display()))?,
        None => UserState::default(),
    };
    for name in state.unknown_names(&catalog) {
        tracing::warn!(name, "user state names an entry missing from the catalog");
    }

    let ctx = commands::Context {
        catalog: &catalog,
        state: &state,
        config: &config,
        format: cli.format,
    };
    let output = commands::execute(&ctx, &cli.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
