//! Team Database Operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A team and its coach
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub sport: String,
    pub coach_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// List all teams ordered by name
pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "SELECT id, name, sport, coach_id, created_at FROM teams ORDER BY name",
    )
    .fetch_all(pool)
    .await
}

/// Get a team by ID
pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "SELECT id, name, sport, coach_id, created_at FROM teams WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a team coached by `coach_id`
pub async fn create_team(
    pool: &PgPool,
    name: &str,
    sport: &str,
    coach_id: Uuid,
) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (id, name, sport, coach_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, sport, coach_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(sport)
    .bind(coach_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}
