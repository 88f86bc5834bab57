/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::shared::Role;

const USER_COLUMNS: &str = "id, name, email, password_hash, role, team_id, created_at, updated_at";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role
    #[sqlx(try_from = "String")]
    pub role: Role,
    /// Team the user belongs to, if any
    pub team_id: Option<uuid::Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `role` - Account role
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// Emails are matched case-insensitively.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE LOWER(email) = LOWER($1)",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: uuid::Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Update a user's display name
///
/// # Returns
/// Updated user, or `None` if no user has this ID
pub async fn update_user_name(
    pool: &PgPool,
    user_id: uuid::Uuid,
    name: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET name = $1, updated_at = $2
        WHERE id = $3
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(name)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Assign a user to a team
pub async fn set_user_team(
    pool: &PgPool,
    user_id: uuid::Uuid,
    team_id: uuid::Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET team_id = $1, updated_at = $2
        WHERE id = $3
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(team_id)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
