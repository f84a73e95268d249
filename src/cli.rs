//! CLI command definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio_web::HostConfig;

/// Folio - portfolio site host
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Serve the Folio portfolio site")]
#[command(
    long_about = "Folio serves the compiled Leptos frontend with history fallback, so every client-side route can be deep-linked."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "folio.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the built site
    Serve(ServeArgs),

    /// Validate the configuration file and print the effective values
    Check,
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind, overrides `[host] bind_address`
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Directory with the built UI, overrides `[host] dist_dir`
    #[arg(short, long)]
    pub dist: Option<PathBuf>,

    /// Disable gzip compression
    #[arg(long, default_value_t = false)]
    pub no_compression: bool,
}

impl ServeArgs {
    /// Layer the flags that were given over `host`.
    #[must_use]
    pub fn apply(self, host: HostConfig) -> HostConfig {
        HostConfig {
            bind_address: self.bind.unwrap_or(host.bind_address),
            dist_dir: self.dist.unwrap_or(host.dist_dir),
            compression: host.compression && !self.no_compression,
        }
    }
}
