//! Session cookie `Set-Cookie` values.

use axum::{
    http::{header::SET_COOKIE, HeaderValue},
    response::Response,
};

/// Cookie that stores a session token for `max_age_secs`
pub fn session_cookie(name: &str, token: &str, max_age_secs: i64) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        name, token, max_age_secs
    ))
    .ok()
}

/// Cookie that removes the session token from the browser
pub fn cleared_cookie(name: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        name
    ))
    .ok()
}

/// Append a `Set-Cookie` header to a response
///
/// Values that are not valid header text are skipped with a warning.
pub fn attach(response: &mut Response, cookie: Option<HeaderValue>) {
    match cookie {
        Some(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        None => tracing::warn!("Skipping session cookie with invalid header characters"),
    }
}
