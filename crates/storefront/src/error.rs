//! Unified error handling.
//!
//! Provides a unified `AppError` type mapping the error taxonomy onto HTTP
//! statuses. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed or timed out.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found in any consulted collection.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or missing client input, or a violated precondition.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors; client errors are the caller's problem
        if let Self::Database(ref err) = self {
            tracing::error!(error = %err, "Request error");
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
