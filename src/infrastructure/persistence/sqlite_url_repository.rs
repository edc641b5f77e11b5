//! SQLite implementation of the URL store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::domain::repositories::{UrlRepository, UrlSaver};
use crate::error::StorageError;
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for alias → URL mappings.
///
/// Alias uniqueness is enforced by the `UNIQUE` constraint on `url.alias`;
/// an insert that violates it fails atomically and is reported as
/// [`StorageError::AliasExists`]. Conflicting concurrent writes are
/// serialized by SQLite itself.
pub struct SqliteUrlRepository {
    pool: SqlitePool,
    closed: AtomicBool,
}

impl SqliteUrlRepository {
    /// Creates a new repository over an already migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            closed: AtomicBool::new(false),
        }
    }

    /// Opens the database at `storage_path` and applies the embedded migrations.
    ///
    /// `storage_path` is either a file path (created if missing) or a
    /// `sqlite:` connection URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the database cannot be opened
    /// or migrated.
    pub async fn connect(storage_path: &str, max_connections: u32) -> Result<Self, StorageError> {
        const OP: &str = "storage.sqlite.connect";

        let options = connect_options(storage_path)
            .map_err(|e| StorageError::unavailable(OP, e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::unavailable(OP, e))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::unavailable(OP, e))?;

        tracing::debug!(op = OP, storage_path, "Storage opened");

        Ok(Self::new(pool))
    }

    fn ensure_open(&self, op: &'static str) -> Result<(), StorageError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Closed { op });
        }
        Ok(())
    }
}

fn connect_options(storage_path: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    if storage_path.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(storage_path)
    } else {
        Ok(SqliteConnectOptions::new().filename(storage_path))
    }
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.sqlite.save";
        self.ensure_open(OP)?;

        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?1, ?2)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(StorageError::AliasExists {
                op: OP,
                alias: alias.to_string(),
            }),
            Err(e) => Err(StorageError::unavailable(OP, e)),
        }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn get(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.get";
        self.ensure_open(OP)?;

        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(OP, e))?;

        url.ok_or_else(|| StorageError::NotFound {
            op: OP,
            alias: alias.to_string(),
        })
    }

    async fn delete(&self, url: &str) -> Result<u64, StorageError> {
        const OP: &str = "storage.sqlite.delete";
        self.ensure_open(OP)?;

        let done = sqlx::query("DELETE FROM url WHERE url = ?1")
            .bind(url)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(OP, e))?;

        Ok(done.rows_affected())
    }

    async fn close(&self) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.close";

        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(StorageError::Closed { op: OP });
        }

        let mut errors = Vec::new();

        // Fold the WAL back into the main file before the connections go away.
        if let Err(e) = sqlx::query("PRAGMA wal_checkpoint(TRUNCATE)")
            .execute(&self.pool)
            .await
        {
            errors.push(format!("wal checkpoint: {e}"));
        }

        self.pool.close().await;

        if errors.is_empty() {
            Ok(())
        } else {
            Err(StorageError::Close { op: OP, errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_accepts_plain_path() {
        let options = connect_options("./storage/storage.db").unwrap();
        assert_eq!(
            options.get_filename(),
            std::path::Path::new("./storage/storage.db")
        );
    }

    #[test]
    fn test_connect_options_accepts_sqlite_url() {
        assert!(connect_options("sqlite://data.db").is_ok());
        assert!(connect_options("sqlite::memory:").is_ok());
    }
}
