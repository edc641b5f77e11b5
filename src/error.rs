//! Error types for the storage layer and the HTTP surface.
//!
//! [`StorageError`] is what repositories return; every variant names the
//! operation that produced it so the cause can be logged with context.
//! [`AppError`] is what handlers return; it renders the `error` response body
//! and never carries internal detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::response::ApiResponse;

/// Boxed driver-level cause kept inside [`StorageError::Unavailable`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported by a URL store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Insert rejected by the alias uniqueness constraint.
    #[error("{op}: alias already exists: {alias}")]
    AliasExists { op: &'static str, alias: String },

    /// No record has the requested alias.
    #[error("{op}: no url for alias: {alias}")]
    NotFound { op: &'static str, alias: String },

    /// Any I/O or driver failure.
    #[error("{op}: {source}")]
    Unavailable {
        op: &'static str,
        #[source]
        source: BoxError,
    },

    /// The store has already been closed.
    #[error("{op}: storage is closed")]
    Closed { op: &'static str },

    /// One or more failures while releasing the store.
    #[error("{op}: {}", errors.join(", "))]
    Close {
        op: &'static str,
        errors: Vec<String>,
    },
}

impl StorageError {
    pub fn unavailable(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Unavailable {
            op,
            source: source.into(),
        }
    }

    /// Returns true if the error is an alias uniqueness violation.
    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists { .. })
    }

    /// Returns true if the error is a missing alias.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Request-level failure returned by handlers and services.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    AliasConflict { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn alias_conflict(message: impl Into<String>) -> Self {
        Self::AliasConflict {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasConflict { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::AliasConflict { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        };

        (status, Json(ApiResponse::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_alias_conflict_response() {
        let response = AppError::alias_conflict("URL already exists").into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "error", "error": "URL already exists" })
        );
    }

    #[tokio::test]
    async fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("x").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_carries_operation() {
        let err = StorageError::AliasExists {
            op: "storage.sqlite.save",
            alias: "ex1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "storage.sqlite.save: alias already exists: ex1"
        );
        assert!(err.is_alias_exists());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_close_error_aggregates_messages() {
        let err = StorageError::Close {
            op: "storage.sqlite.close",
            errors: vec!["checkpoint failed".to_string(), "busy".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "storage.sqlite.close: checkpoint failed, busy"
        );
    }

    #[test]
    fn test_unavailable_keeps_source() {
        use std::error::Error as _;

        let err = StorageError::unavailable("storage.memory.get", "disk on fire");
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "storage.memory.get: disk on fire");
    }
}
