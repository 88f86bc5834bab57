//! Event HTTP Handlers
//!
//! Anyone signed in can read the calendar. Only ADMIN accounts edit it.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::{self, Event, NewEvent};
use crate::backend::auth::gate::authorize;
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::error::validate_length;
use crate::shared::Role;

/// Create event request
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
}

/// Empty optional strings are stored as NULL
fn optional_field<'a>(
    field: &str,
    value: &'a Option<String>,
    max: usize,
) -> Result<Option<&'a str>, BackendError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(Some(validate_length(field, v, 1, max)?)),
        _ => Ok(None),
    }
}

/// `GET /api/events`
pub async fn list_events(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
) -> HandlerResult<Json<Vec<Event>>> {
    let events = db::list_events(state.db()?).await?;
    Ok(Json(events))
}

/// `POST /api/events`
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateEventRequest>,
) -> HandlerResult<(StatusCode, Json<Event>)> {
    authorize(&identity, Role::Admin)?;
    let pool = state.db()?;

    let new_event = NewEvent {
        title: validate_length("title", &request.title, 1, 200)?,
        description: optional_field("description", &request.description, 2000)?,
        location: optional_field("location", &request.location, 200)?,
        starts_at: request.starts_at,
        created_by: identity.user_uuid()?,
    };

    let event = db::create_event(pool, new_event).await?;
    tracing::info!("Admin {} created event {}", identity.user_id, event.id);
    Ok((StatusCode::CREATED, Json(event)))
}

/// `DELETE /api/events/{id}`
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(event_id): Path<Uuid>,
) -> HandlerResult<StatusCode> {
    authorize(&identity, Role::Admin)?;

    if !db::delete_event(state.db()?, event_id).await? {
        return Err(BackendError::not_found("Event"));
    }

    tracing::info!("Admin {} deleted event {}", identity.user_id, event_id);
    Ok(StatusCode::NO_CONTENT)
}
