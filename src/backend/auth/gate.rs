/**
 * Auth Gate
 *
 * Turns the raw credentials on a request into a verified identity, and
 * checks identities against a required role.
 *
 * # Credential Sources
 *
 * 1. `Authorization: Bearer <token>` header
 * 2. The session cookie (named `token` by default)
 *
 * The header takes precedence when both are present. A request with
 * neither carries no credential, which is reported as
 * `AuthError::NoCredential` by `authenticate` and is not an error for
 * `extract_credential`.
 */

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::sessions::{AuthenticatedUser, TokenCodec};
use crate::shared::Role;

/// Find the raw session token on a request, if any
pub fn extract_credential(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    bearer_token(headers).or_else(|| cookie_value(headers, cookie_name))
}

/// Verify the request's credential
pub fn authenticate(
    headers: &HeaderMap,
    cookie_name: &str,
    codec: &TokenCodec,
) -> Result<AuthenticatedUser, AuthError> {
    let token = extract_credential(headers, cookie_name).ok_or(AuthError::NoCredential)?;
    codec.verify(&token)
}

/// Require an exact role match
pub fn authorize(identity: &AuthenticatedUser, required_role: Role) -> Result<(), AuthError> {
    if identity.role != required_role {
        return Err(AuthError::Forbidden {
            required: required_role,
            actual: identity.role,
        });
    }
    Ok(())
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
