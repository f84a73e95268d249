//! # Folio - Main Entry Point
//!
//! Loads `folio.toml`, applies CLI overrides, and runs the static host
//! until Ctrl+C.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio::FolioConfig;
use folio::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = FolioConfig::load(&cli.config)
        .with_context(|| format!("Configuration in {} is invalid", cli.config.display()))?;

    match cli.command {
        Commands::Serve(args) => {
            let host = args.apply(config.host);
            info!(bind = %host.bind_address, dist = %host.dist_dir.display(), "Starting Folio");
            folio_web::server::run_server(host)
                .await
                .context("Static host failed")?;
        }
        Commands::Check => {
            info!(path = %cli.config.display(), "Configuration is valid");
            info!(?config.site, "site");
            info!(?config.host, "host");
        }
    }

    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,folio=debug,folio_web=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
