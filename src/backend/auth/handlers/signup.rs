/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email, password and requested role
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue a session token and set the session cookie
 *
 * # Validation
 *
 * - Name must be 1-80 characters after trimming
 * - Email must contain '@' (basic validation); stored lower-cased
 * - Password must be at least 8 characters long
 * - Role defaults to STUDENT; ADMIN accounts cannot be self-registered
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::cookies;
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::passwords::{hash_password, MIN_PASSWORD_LEN};
use crate::backend::auth::users::{create_user, get_user_by_email, User};
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::server::state::AppState;
use crate::shared::error::validate_length;
use crate::shared::{Role, SharedError};

/// Check the request and return `(name, email, role)` normalized
pub(crate) fn validate_signup(request: &SignupRequest) -> Result<(String, String, Role), SharedError> {
    let name = validate_length("name", &request.name, 1, 80)?.to_string();

    let email = request.email.trim().to_lowercase();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    let role = request.role.unwrap_or(Role::Student);
    if role == Role::Admin {
        return Err(SharedError::validation(
            "role",
            "Admin accounts cannot be self-registered",
        ));
    }

    Ok((name, email, role))
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid name, email, password or role
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Database not configured
/// * `500 Internal Server Error` - Hashing, storage or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Jordan Lee",
///   "email": "jordan@uni.edu",
///   "password": "securepassword123",
///   "role": "STUDENT"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> HandlerResult<Response> {
    let (name, email, role) = validate_signup(&request)?;
    let pool = state.db()?;
    tracing::info!("Signup request for email: {}", email);

    if get_user_by_email(pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::handler(StatusCode::CONFLICT, "Email already registered"));
    }

    let password_hash = hash_password(request.password).await?;

    let user = create_user(pool, &name, &email, &password_hash, role)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                BackendError::handler(StatusCode::CONFLICT, "Email already registered")
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.role);

    session_response(&state, user, StatusCode::CREATED)
}

/// Issue a token for `user` and return it in both the body and the cookie
pub(crate) fn session_response(
    state: &AppState,
    user: User,
    status: StatusCode,
) -> HandlerResult<Response> {
    let token = state
        .tokens
        .issue(&user.id.to_string(), &user.email, user.role)?;

    let cookie = cookies::session_cookie(
        state.cookie_name(),
        &token,
        state.tokens.ttl().num_seconds(),
    );

    let mut response = (
        status,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    )
        .into_response();
    cookies::attach(&mut response, cookie);

    Ok(response)
}
