/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Expected outcomes of a request that carry their own status code:
 * - Duplicate users and invalid credentials (400)
 * - Missing or invalid tokens, non-owner writes (401)
 * - Missing blogs or users (404)
 *
 * ## Validation Errors
 *
 * Field-level failures produced by `shared::validation`, reported as 400
 * with the list of failing fields.
 *
 * ## Internal Errors
 *
 * Database, password hashing, token signing and file I/O failures. These
 * are logged server-side and reported to the client as a generic 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use inkpost::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Blog not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. 400, 401, 404)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Validation or payload error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordError(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// Upload storage failure
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 (validation)
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_)
            | Self::PasswordError(_)
            | Self::TokenError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(err) => err.to_string(),
            Self::PasswordError(err) => err.to_string(),
            Self::TokenError(err) => err.to_string(),
            Self::StorageError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }

    /// True for failures that are the server's fault
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
