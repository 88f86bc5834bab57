//! Shared Error Types
//!
//! Error types for input validation that are not tied to HTTP. The backend
//! wraps them in `BackendError`, which maps every variant to `400 Bad Request`.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field has an unacceptable value
//! - `LengthError` - A text field is shorter or longer than allowed
//!
//! # Usage
//!
//! ```rust
//! use sportshub::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! ```
use thiserror::Error;

/// Validation errors shared across modules
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Text length outside the accepted bounds (in characters)
    #[error("Field '{field}' must be between {min} and {max} characters")]
    LengthError {
        field: String,
        min: usize,
        max: usize,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new length error
    pub fn length(field: impl Into<String>, min: usize, max: usize) -> Self {
        Self::LengthError {
            field: field.into(),
            min,
            max,
        }
    }
}

/// Check that a trimmed text value has between `min` and `max` characters
///
/// Returns the trimmed value on success.
pub fn validate_length<'a>(
    field: &str,
    value: &'a str,
    min: usize,
    max: usize,
) -> Result<&'a str, SharedError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(SharedError::length(field, min, max));
    }
    Ok(trimmed)
}
