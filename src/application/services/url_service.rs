//! Alias assignment and persistence service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{UrlRepository, UrlSaver};
use crate::error::{AppError, StorageError};
use crate::utils::alias_generator::{DEFAULT_ALIAS_LENGTH, generate_alias};

/// Message shown to clients when an alias is already taken.
pub const ALIAS_CONFLICT_MESSAGE: &str = "URL already exists";

/// Service for storing URLs under caller-supplied or generated aliases.
///
/// Saving only needs a [`UrlSaver`]; lookup, delete and shutdown are
/// available when the store is a full [`UrlRepository`].
pub struct UrlService<R: ?Sized> {
    repository: Arc<R>,
    alias_length: usize,
}

impl<R: ?Sized> UrlService<R> {
    /// Creates a new service that generates aliases from `alias_length`
    /// entropy bytes.
    pub fn new(repository: Arc<R>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    /// Creates a new service with [`DEFAULT_ALIAS_LENGTH`].
    pub fn with_default_alias_length(repository: Arc<R>) -> Self {
        Self::new(repository, DEFAULT_ALIAS_LENGTH)
    }
}

impl<R: UrlSaver + ?Sized> UrlService<R> {
    /// Stores `url` under `alias`, generating an alias when none is given.
    ///
    /// A non-empty `alias` is used verbatim. Uniqueness is left to the
    /// store; a colliding alias, generated or not, is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasConflict`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on any other storage failure.
    pub async fn save_url(&self, url: &str, alias: Option<&str>) -> Result<UrlRecord, AppError> {
        const OP: &str = "service.url.save";

        let alias = match alias {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => generate_alias(self.alias_length),
        };

        match self.repository.save(url, &alias).await {
            Ok(id) => {
                tracing::info!(op = OP, id, alias = %alias, "URL added");
                Ok(UrlRecord::new(id, alias, url.to_string()))
            }
            Err(StorageError::AliasExists { .. }) => {
                tracing::info!(op = OP, alias = %alias, url, "Alias already exists");
                Err(AppError::alias_conflict(ALIAS_CONFLICT_MESSAGE))
            }
            Err(e) => {
                tracing::error!(op = OP, error = %e, "Failed to add URL");
                Err(AppError::internal("failed to add URL"))
            }
        }
    }
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Returns the destination stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        const OP: &str = "service.url.get";

        self.repository.get(alias).await.map_err(|e| match e {
            StorageError::NotFound { .. } => AppError::not_found("URL not found"),
            e => {
                tracing::error!(op = OP, error = %e, "Failed to get URL");
                AppError::internal("failed to get URL")
            }
        })
    }

    /// Removes every record pointing at `url` and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete_url(&self, url: &str) -> Result<u64, AppError> {
        const OP: &str = "service.url.delete";

        let deleted = self.repository.delete(url).await.map_err(|e| {
            tracing::error!(op = OP, error = %e, "Failed to delete URL");
            AppError::internal("failed to delete URL")
        })?;

        tracing::info!(op = OP, url, deleted, "URL deleted");
        Ok(deleted)
    }

    /// Releases the store. See [`UrlRepository::close`].
    pub async fn close(&self) -> Result<(), StorageError> {
        self.repository.close().await
    }
}
