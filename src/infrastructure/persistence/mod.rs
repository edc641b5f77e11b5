//! URL store implementations.
//!
//! - [`SqliteUrlRepository`] - SQLite storage through SQLx
//! - [`InMemoryUrlRepository`] - Process-local storage for tests

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
