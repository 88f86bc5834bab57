//! Event Database Operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

const EVENT_COLUMNS: &str = "id, title, description, location, starts_at, created_by, created_at";

/// A scheduled hub event
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new event
#[derive(Debug, Clone)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub starts_at: DateTime<Utc>,
    pub created_by: Uuid,
}

/// List events, soonest first
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        "SELECT {} FROM events ORDER BY starts_at ASC",
        EVENT_COLUMNS
    ))
    .fetch_all(pool)
    .await
}

/// Insert an event
pub async fn create_event(pool: &PgPool, event: NewEvent<'_>) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        r#"
        INSERT INTO events (id, title, description, location, starts_at, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {}
        "#,
        EVENT_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(event.title)
    .bind(event.description)
    .bind(event.location)
    .bind(event.starts_at)
    .bind(event.created_by)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Delete an event. Returns whether a row was removed.
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
