/**
 * Logout Handler
 *
 * POST /api/auth/logout clears the session cookie. Tokens are stateless,
 * so a copied token stays valid until it expires.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::auth::cookies;
use crate::backend::server::state::AppState;

/// Logout handler
pub async fn logout(State(state): State<AppState>) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    cookies::attach(&mut response, cookies::cleared_cookie(state.cookie_name()));
    response
}
