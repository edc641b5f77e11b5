//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber once at startup. Components
//! never hold a logger; they emit `tracing` events and the per-request
//! context (operation, request id) comes from the spans they run in.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `LOG_LEVEL`.
/// `LOG_FORMAT=json` emits one JSON object per event; `text` is meant for
/// terminals.
///
/// # Errors
///
/// Returns an error if the filter cannot be parsed or a subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = build_filter(&config.log_level)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.log_format == "json" {
        builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(log_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level)
            .map_err(|e| anyhow!("invalid log level '{log_level}': {e}")),
    }
}
