/**
 * Authentication Errors
 *
 * The five ways a request can fail authentication or authorization.
 * None of them are retried. The middleware turns them into a redirect and
 * handlers turn them into 401/403 responses; the specific reason is only
 * ever logged, never sent to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::Role;

/// Authentication/authorization failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Neither a bearer header nor a session cookie was presented
    #[error("no credential presented")]
    NoCredential,

    /// The credential could not be parsed as a session token
    #[error("malformed session token")]
    Malformed,

    /// The token signature does not match the server secret
    #[error("session token signature mismatch")]
    BadSignature,

    /// The token's expiry is at or before the current time
    #[error("session token expired")]
    Expired,

    /// The identity is valid but carries the wrong role
    #[error("role {actual} does not satisfy required role {required}")]
    Forbidden {
        required: Role,
        actual: Role,
    },
}

impl AuthError {
    /// HTTP status for handler-level responses
    ///
    /// Authentication failures are 401; role mismatches are 403.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Short message safe to show to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NoCredential => "Authentication required",
            Self::Malformed | Self::BadSignature | Self::Expired => "Invalid or expired session",
            Self::Forbidden { .. } => "You do not have access to this resource",
        }
    }

    /// Whether a credential was presented but rejected
    ///
    /// The middleware redirects on these even for paths that are not
    /// declared protected.
    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, Self::Malformed | Self::BadSignature | Self::Expired)
    }
}
