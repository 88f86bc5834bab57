/**
 * Post HTTP Handlers
 *
 * The feed is readable and writable by every signed-in role. A post can
 * only be deleted by its author; roles do not grant moderation.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::{self, Post, FEED_LIMIT};
use crate::backend::auth::sessions::AuthenticatedUser;
use crate::backend::error::{BackendError, HandlerResult};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::error::validate_length;

/// Maximum post length in characters
pub const MAX_POST_LEN: usize = 2000;

/// Create post request
#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// Only the author may remove a post
pub(crate) fn ensure_author(identity: &AuthenticatedUser, post: &Post) -> Result<(), BackendError> {
    if post.user_id.to_string() == identity.user_id {
        Ok(())
    } else {
        Err(BackendError::handler(
            StatusCode::FORBIDDEN,
            "Only the author can delete this post",
        ))
    }
}

/// `GET /api/posts`
pub async fn list_posts(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
) -> HandlerResult<Json<Vec<Post>>> {
    let posts = db::list_posts(state.db()?, FEED_LIMIT).await?;
    Ok(Json(posts))
}

/// `POST /api/posts`
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> HandlerResult<(StatusCode, Json<Post>)> {
    let pool = state.db()?;
    let content = validate_length("content", &request.content, 1, MAX_POST_LEN)?;

    let post = db::create_post(pool, identity.user_uuid()?, content).await?;
    tracing::debug!("User {} posted {}", identity.user_id, post.id);
    Ok((StatusCode::CREATED, Json(post)))
}

/// `DELETE /api/posts/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(post_id): Path<Uuid>,
) -> HandlerResult<StatusCode> {
    let pool = state.db()?;

    let post = db::get_post(pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    if let Err(e) = ensure_author(&identity, &post) {
        tracing::warn!("User {} tried to delete post {} owned by {}", identity.user_id, post.id, post.user_id);
        return Err(e);
    }

    db::delete_post(pool, post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
