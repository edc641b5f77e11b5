//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_ADDRESS="localhost:8080"
//! ```
//!
//! Variables may also come from a dotenv-format file: `.env` in the working
//! directory is read when present, and `CONFIG_PATH` names an additional file
//! that must exist. Values already set in the environment win.
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (or `sqlite:` URL)
//!
//! ## Optional Variables
//!
//! - `HTTP_ADDRESS` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT_SECS` - Per-request timeout (default: 5)
//! - `LOG_LEVEL` - Log level (default: `info`, `RUST_LOG` takes precedence)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `json`)
//! - `ALIAS_LENGTH` - Entropy bytes per generated alias (default: 6)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 10)

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub http_address: String,
    /// Upper bound on handling a single request, in seconds.
    pub http_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
    /// Entropy bytes used for generated aliases.
    pub alias_length: usize,
    /// Maximum number of connections in the SQLite pool.
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORAGE_PATH` is missing or a numeric variable
    /// cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let http_address = env::var("HTTP_ADDRESS").unwrap_or_else(|_| "localhost:8080".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

        let http_timeout_secs = parse_var("HTTP_TIMEOUT_SECS", 5)?;
        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;

        Ok(Self {
            storage_path,
            http_address,
            http_timeout_secs,
            log_level,
            log_format,
            alias_length,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `http_address` is not `host:port`
    /// - `http_timeout_secs` is zero
    /// - `log_level` or `log_format` is unknown
    /// - `alias_length` is outside 1..=64
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.http_address.contains(':') {
            anyhow::bail!(
                "HTTP_ADDRESS must be in format 'host:port', got '{}'",
                self.http_address
            );
        }

        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.alias_length == 0 || self.alias_length > 64 {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and 64, got {}",
                self.alias_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.http_address);
        tracing::info!("  Request timeout: {}s", self.http_timeout_secs);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Alias length: {} bytes", self.alias_length);
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads dotenv-format configuration files into the environment.
///
/// `.env` is optional. When `CONFIG_PATH` is set, the file it names must
/// exist and parse.
///
/// # Errors
///
/// Returns an error if `CONFIG_PATH` points to a missing or unreadable file.
pub fn load_config_files() -> Result<()> {
    dotenvy::dotenv().ok();

    if let Ok(config_path) = env::var("CONFIG_PATH") {
        if !Path::new(&config_path).exists() {
            anyhow::bail!("Couldn't find config file at {config_path}");
        }
        dotenvy::from_path(&config_path)
            .with_context(|| format!("Couldn't read config file {config_path}"))?;
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via [`load_config_files`] in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
