//! HTTP server initialization and runtime setup.
//!
//! Opens the store, serves the router until a shutdown signal arrives, then
//! releases the store exactly once.

use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
///
/// A failure to close the store on the way out is logged, not returned.
pub async fn run(config: Config) -> Result<()> {
    let repository = SqliteUrlRepository::connect(&config.storage_path, config.db_max_connections)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!("Storage ready");

    let state = AppState::new(Arc::new(repository), config.alias_length);
    let app = app_router(state.clone(), config.http_timeout());

    let listener = tokio::net::TcpListener::bind(&config.http_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.http_address))?;
    tracing::info!(address = %config.http_address, "Starting server");
    tracing::debug!("Debug logs enabled");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &served {
        Ok(()) => tracing::info!("Server stopped"),
        Err(e) => tracing::error!(error = %e, "Server stopped with error"),
    }

    if let Err(e) = state.url_service.close().await {
        tracing::error!(error = %e, "Failed to close storage");
    }

    served.context("Server error")
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
