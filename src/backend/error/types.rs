/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status: missing database,
 * unknown resource, duplicate email, bad credentials.
 *
 * ## Authentication Errors
 *
 * `AuthError` from the auth gate. 401 for authentication failures, 403 for
 * role mismatches. Only a short public message is sent to the client.
 *
 * ## Internal Errors
 *
 * Database, token-signing and serialization failures. These are logged
 * with full detail and reported to the client as a generic 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use sportshub::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Team not found");
/// let err = BackendError::not_found("Event");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication or authorization failure
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Storage layer failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 404 for a missing resource
    pub fn not_found(entity: &str) -> Self {
        Self::handler(StatusCode::NOT_FOUND, format!("{} not found", entity))
    }

    /// Generic 500 when the database pool is not configured
    pub fn database_unavailable() -> Self {
        Self::handler(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - 401, or 403 for role mismatches
    /// - `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => err.status_code(),
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Token(_)
            | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.public_message().to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Database(_)
            | Self::Token(_)
            | Self::PasswordHash(_) => "Internal server error".to_string(),
        }
    }

    /// Whether this error hides an internal failure from the client
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}
