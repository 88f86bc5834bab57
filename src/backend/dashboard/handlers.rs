/**
 * Dashboard and Settings Handlers
 *
 * Each dashboard belongs to exactly one role. The handlers re-authenticate
 * the request and check the role themselves, even though the middleware
 * has already let the request through: the middleware does not look at
 * roles at all.
 *
 * # Routes
 *
 * - `GET /admin/dashboard` - ADMIN
 * - `GET /coach/dashboard` - COACH
 * - `GET /student/dashboard` - STUDENT
 * - `GET /api/student/settings` - STUDENT
 * - `PUT /api/student/settings` - STUDENT
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::auth::gate::authorize;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::sessions::AuthenticatedUser;
use crate::backend::auth::users::{get_user_by_id, update_user_name};
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::error::validate_length;
use crate::shared::Role;

/// Body of every dashboard response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    pub section: String,
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

/// Settings update request
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateSettingsRequest {
    pub name: String,
}

fn dashboard_for(identity: AuthenticatedUser, required: Role) -> HandlerResult<Json<DashboardResponse>> {
    authorize(&identity, required)?;
    Ok(Json(DashboardResponse {
        section: required.dashboard_path().to_string(),
        user_id: identity.user_id,
        email: identity.email,
        role: identity.role,
    }))
}

/// `GET /admin/dashboard`
pub async fn admin_dashboard(AuthUser(identity): AuthUser) -> HandlerResult<Json<DashboardResponse>> {
    dashboard_for(identity, Role::Admin)
}

/// `GET /coach/dashboard`
pub async fn coach_dashboard(AuthUser(identity): AuthUser) -> HandlerResult<Json<DashboardResponse>> {
    dashboard_for(identity, Role::Coach)
}

/// `GET /student/dashboard`
pub async fn student_dashboard(AuthUser(identity): AuthUser) -> HandlerResult<Json<DashboardResponse>> {
    dashboard_for(identity, Role::Student)
}

/// `GET /api/student/settings`
pub async fn get_settings(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> HandlerResult<Json<UserResponse>> {
    authorize(&identity, Role::Student)?;
    let pool = state.db()?;

    let user = get_user_by_id(pool, identity.user_uuid()?)
        .await?
        .ok_or_else(|| BackendError::not_found("User"))?;

    Ok(Json(UserResponse::from(user)))
}

/// `PUT /api/student/settings`
pub async fn update_settings(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<UpdateSettingsRequest>,
) -> HandlerResult<Json<UserResponse>> {
    authorize(&identity, Role::Student)?;
    let pool = state.db()?;
    let name = validate_length("name", &request.name, 1, 80)?;

    let user = update_user_name(pool, identity.user_uuid()?, name)
        .await?
        .ok_or_else(|| BackendError::not_found("User"))?;

    tracing::info!("Updated settings for user {}", user.id);
    Ok(Json(UserResponse::from(user)))
}
