/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the record of the user named by the request's
 * session token. The credential is verified here through `AuthUser`,
 * independently of the middleware.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid credential
/// * `404 Not Found` - The token names a user that no longer exists
/// * `500 Internal Server Error` - Database not configured
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> HandlerResult<Json<UserResponse>> {
    let pool = state.db()?;
    let user_id = identity.user_uuid()?;

    let user = get_user_by_id(pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user_id);
        BackendError::not_found("User")
    })?;

    Ok(Json(UserResponse::from(user)))
}
