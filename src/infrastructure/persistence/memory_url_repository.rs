//! In-process implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{UrlRepository, UrlSaver};
use crate::error::StorageError;

/// A URL store that keeps every record in memory.
///
/// Honors the same contract as the SQLite store: unique aliases, ids that
/// only grow, delete keyed by destination. Nothing survives the process.
///
/// # Use Cases
///
/// - Handler and service tests that should not touch a database file
/// - Checking that callers only rely on the repository traits
pub struct InMemoryUrlRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<String, UrlRecord>,
    last_id: i64,
    closed: bool,
}

impl Inner {
    fn ensure_open(&self, op: &'static str) -> Result<(), StorageError> {
        if self.closed {
            return Err(StorageError::Closed { op });
        }
        Ok(())
    }
}

impl InMemoryUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL storage");
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlSaver for InMemoryUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.memory.save";

        let mut inner = self.inner.lock().await;
        inner.ensure_open(OP)?;

        if inner.records.contains_key(alias) {
            return Err(StorageError::AliasExists {
                op: OP,
                alias: alias.to_string(),
            });
        }

        inner.last_id += 1;
        let id = inner.last_id;
        inner.records.insert(
            alias.to_string(),
            UrlRecord::new(id, alias.to_string(), url.to_string()),
        );

        Ok(id)
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.memory.get";

        let inner = self.inner.lock().await;
        inner.ensure_open(OP)?;

        inner
            .records
            .get(alias)
            .map(|record| record.url.clone())
            .ok_or_else(|| StorageError::NotFound {
                op: OP,
                alias: alias.to_string(),
            })
    }

    async fn delete(&self, url: &str) -> Result<u64, StorageError> {
        const OP: &str = "storage.memory.delete";

        let mut inner = self.inner.lock().await;
        inner.ensure_open(OP)?;

        let before = inner.records.len();
        inner.records.retain(|_, record| record.url != url);

        Ok((before - inner.records.len()) as u64)
    }

    async fn close(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.memory.close";

        let mut inner = self.inner.lock().await;
        inner.ensure_open(OP)?;

        inner.closed = true;
        inner.records.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_get() {
        let repo = InMemoryUrlRepository::new();

        let id = repo.save("https://example.com", "ex1").await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(repo.get("ex1").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_duplicate_alias_keeps_first_record() {
        let repo = InMemoryUrlRepository::new();
        repo.save("https://first.com", "dup").await.unwrap();

        let err = repo.save("https://second.com", "dup").await.unwrap_err();

        assert!(err.is_alias_exists());
        assert_eq!(repo.get("dup").await.unwrap(), "https://first.com");
    }

    #[tokio::test]
    async fn test_aliases_are_case_sensitive() {
        let repo = InMemoryUrlRepository::new();
        repo.save("https://lower.com", "abc").await.unwrap();
        repo.save("https://upper.com", "ABC").await.unwrap();

        assert_eq!(repo.get("abc").await.unwrap(), "https://lower.com");
        assert_eq!(repo.get("ABC").await.unwrap(), "https://upper.com");
    }

    #[tokio::test]
    async fn test_get_missing_alias() {
        let repo = InMemoryUrlRepository::new();
        let err = repo.get("nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_counts_every_matching_record() {
        let repo = InMemoryUrlRepository::new();
        repo.save("https://shared.com", "a").await.unwrap();
        repo.save("https://shared.com", "b").await.unwrap();
        repo.save("https://other.com", "c").await.unwrap();

        assert_eq!(repo.delete("https://shared.com").await.unwrap(), 2);
        assert_eq!(repo.delete("https://shared.com").await.unwrap(), 0);
        assert!(repo.get("a").await.unwrap_err().is_not_found());
        assert_eq!(repo.get("c").await.unwrap(), "https://other.com");
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUrlRepository::new();
        let first = repo.save("https://example.com", "a").await.unwrap();
        repo.delete("https://example.com").await.unwrap();

        let second = repo.save("https://example.com", "b").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_close_twice_is_reported() {
        let repo = InMemoryUrlRepository::new();
        assert!(repo.close().await.is_ok());

        assert!(matches!(
            repo.close().await,
            Err(StorageError::Closed { .. })
        ));
        assert!(matches!(
            repo.save("https://example.com", "late").await,
            Err(StorageError::Closed { .. })
        ));
    }
}
