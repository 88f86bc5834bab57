//! Post Database Operations

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Feed page size
pub const FEED_LIMIT: i64 = 50;

/// A feed post joined with its author's display name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Newest posts first
pub async fn list_posts(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.user_id, u.name AS author_name, p.content, p.created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Get a post by ID
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.user_id, u.name AS author_name, p.content, p.created_at
        FROM posts p
        JOIN users u ON u.id = p.user_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a post and return it with the author name
pub async fn create_post(pool: &PgPool, user_id: Uuid, content: &str) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        WITH inserted AS (
            INSERT INTO posts (id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, content, created_at
        )
        SELECT i.id, i.user_id, u.name AS author_name, i.content, i.created_at
        FROM inserted i
        JOIN users u ON u.id = i.user_id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(content)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Delete a post
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
