//! Team HTTP Handlers
//!
//! - `GET /api/teams` - any signed-in user
//! - `GET /api/teams/{id}` - any signed-in user
//! - `POST /api/teams` - COACH; the caller becomes the team's coach
//! - `POST /api/teams/{id}/join` - STUDENT; moves the caller onto the team

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::{self, Team};
use crate::backend::auth::gate::authorize;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::set_user_team;
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::error::validate_length;
use crate::shared::Role;

/// Create team request
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub sport: String,
}

/// List all teams
pub async fn list_teams(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
) -> HandlerResult<Json<Vec<Team>>> {
    let teams = db::list_teams(state.db()?).await?;
    Ok(Json(teams))
}

/// Get one team
pub async fn get_team(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(team_id): Path<Uuid>,
) -> HandlerResult<Json<Team>> {
    let team = db::get_team(state.db()?, team_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Team"))?;
    Ok(Json(team))
}

/// Create a team
pub async fn create_team(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateTeamRequest>,
) -> HandlerResult<(StatusCode, Json<Team>)> {
    authorize(&identity, Role::Coach)?;
    let pool = state.db()?;

    let name = validate_length("name", &request.name, 1, 100)?;
    let sport = validate_length("sport", &request.sport, 1, 50)?;

    let team = db::create_team(pool, name, sport, identity.user_uuid()?)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                BackendError::handler(StatusCode::CONFLICT, "Team name already taken")
            }
            other => BackendError::from(other),
        })?;

    tracing::info!("Coach {} created team {} ({})", identity.user_id, team.id, team.name);
    Ok((StatusCode::CREATED, Json(team)))
}

/// Join a team
pub async fn join_team(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(team_id): Path<Uuid>,
) -> HandlerResult<Json<UserResponse>> {
    authorize(&identity, Role::Student)?;
    let pool = state.db()?;

    if db::get_team(pool, team_id).await?.is_none() {
        return Err(BackendError::not_found("Team"));
    }

    let user = set_user_team(pool, identity.user_uuid()?, team_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User"))?;

    tracing::info!("User {} joined team {}", user.id, team_id);
    Ok(Json(UserResponse::from(user)))
}
