//! # URL Minimizer
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! Clients `POST` a URL, optionally with the alias they want; the service
//! stores the mapping and answers with the alias. Aliases are unique: the
//! store's uniqueness constraint is the single source of truth, and a
//! collision is reported to the client instead of overwriting anything.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and repository traits
//! - **Application Layer** ([`application`]) - Alias resolution and error classification
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - Handler, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//!
//! curl -X POST localhost:8080/ -d '{"url":"https://example.com","alias":"ex1"}'
//! # {"status":"ok","alias":"ex1"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::{AppError, StorageError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{UrlRepository, UrlSaver};
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::{InMemoryUrlRepository, SqliteUrlRepository};
    pub use crate::state::AppState;
}
