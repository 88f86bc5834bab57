/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return token and user info, and set the session cookie
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 response, and
 *   both pay for one bcrypt verification
 * - Passwords are never logged or returned
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{Json, Response},
};

use crate::backend::auth::handlers::signup::session_response;
use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::passwords::{verify_dummy_password, verify_password};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::server::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database is not configured
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "jordan@uni.edu",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "Jordan Lee",
///     "email": "jordan@uni.edu",
///     "role": "STUDENT",
///     "team_id": null
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> HandlerResult<Response> {
    let pool = state.db()?;
    let email = request.email.trim().to_lowercase();
    tracing::info!("Login request for: {}", email);

    let Some(user) = get_user_by_email(pool, &email).await? else {
        tracing::warn!("User not found: {}", email);
        verify_dummy_password(request.password).await?;
        return Err(BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS));
    };

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS));
    }

    tracing::info!("User logged in successfully: {} ({})", user.id, user.role);

    session_response(&state, user, StatusCode::OK)
}
