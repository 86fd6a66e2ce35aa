//! Address Book - A small in-memory address book served over HTTP

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use address_book::api::create_router;
use address_book::config::{hydrate_env_file, Config};
use address_book::AppState;

/// Main entry point for the address book server.
///
/// # Startup Sequence
/// 1. Load `.env` if present, then configuration from environment variables
/// 2. Initialize tracing subscriber (verbosity follows the run mode)
/// 3. Create the address book with its seed record
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hydrate_env_file()?;
    let config = Config::from_env();

    // RUST_LOG overrides the run mode's default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.mode.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Address Book Server");
    info!(
        "Configuration loaded: mode={:?}, port={}, public_url={}, auth_key_set={}",
        config.mode,
        config.server_port,
        config.public_url,
        config.auth_key.is_some()
    );
    if config.auth_key.is_none() {
        warn!("AUTH_KEY is not set; create and delete will reject every request");
    }

    let state = AppState::from_config(&config);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
