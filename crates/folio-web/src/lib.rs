//! Folio Web Host
//!
//! Serves the compiled Leptos UI (`trunk build` output) with tower
//! middleware for tracing and compression. Unknown paths fall back to
//! `index.html` so client-side routes such as `/projects` deep-link.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

pub mod server;

/// Host configuration, the `[host]` table of `folio.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Address to bind to (e.g., "127.0.0.1:8080")
    pub bind_address: String,
    /// Directory holding `index.html` and the WASM bundle
    pub dist_dir: PathBuf,
    /// Gzip responses when the client accepts it
    pub compression: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            dist_dir: PathBuf::from("crates/folio-ui/dist"),
            compression: true,
        }
    }
}

impl HostConfig {
    /// Parse `bind_address`.
    ///
    /// # Errors
    ///
    /// Returns `HostError::InvalidBindAddress` if the address does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr, HostError> {
        self.bind_address
            .parse()
            .map_err(|source| HostError::InvalidBindAddress {
                address: self.bind_address.clone(),
                source,
            })
    }

    /// Path of the document served for every client-side route.
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Host errors.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid bind address '{address}': {source}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// The UI has not been built, or `dist_dir` points elsewhere.
    #[error("no index.html in {}; run `trunk build` in crates/folio-ui first", .0.display())]
    DistMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the router serving `config.dist_dir`.
///
/// # Errors
///
/// Returns `HostError::DistMissing` if the directory has no `index.html`.
pub fn create_router(config: &HostConfig) -> Result<Router, HostError> {
    let index = config.index_file();
    if !index.is_file() {
        return Err(HostError::DistMissing(config.dist_dir.clone()));
    }
    info!(
        dist = %config.dist_dir.display(),
        compression = config.compression,
        "Creating router"
    );

    let static_files = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/health", get(health_check))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().gzip(config.compression)),
        );

    Ok(router)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
