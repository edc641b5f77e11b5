//! Repository traits for alias → URL storage.

use async_trait::async_trait;

use crate::error::StorageError;

/// The write capability the save operation depends on.
///
/// Uniqueness is enforced by the implementation's atomic insert; callers
/// never pre-check whether an alias is taken.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `url` under `alias` and returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already taken;
    /// the existing record is left untouched.
    ///
    /// Returns [`StorageError::Unavailable`] on driver or I/O errors.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Full store contract: save, lookup, delete and release.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - in-process map
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[async_trait]
pub trait UrlRepository: UrlSaver {
    /// Returns the destination stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has that alias.
    /// Returns [`StorageError::Unavailable`] on driver or I/O errors.
    async fn get(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes every record whose destination equals `url`.
    ///
    /// Returns the number of removed records; `0` means nothing matched and
    /// is not an error. Aliases are unique but destinations are not, so one
    /// call can remove several records.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] on driver or I/O errors.
    async fn delete(&self, url: &str) -> Result<u64, StorageError>;

    /// Releases the underlying resources.
    ///
    /// Meant to be called once during shutdown. Every failure met while
    /// releasing is reported in a single [`StorageError::Close`]; a second
    /// call returns [`StorageError::Closed`].
    async fn close(&self) -> Result<(), StorageError>;
}
