//! Listener loop with graceful shutdown

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::{HostConfig, HostError, create_router};

/// Bind `config.bind_address` and serve until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the address is invalid, the dist directory is
/// missing, or the listener fails.
pub async fn run_server(config: HostConfig) -> Result<(), HostError> {
    let addr = config.socket_addr()?;
    let app = create_router(&config)?;

    let listener = TcpListener::bind(addr).await?;
    info!("Folio host listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("Folio host stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn wait_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(err) => error!("Failed to listen for shutdown signal: {}", err),
    }
}
