/**
 * API Route Handlers
 *
 * JSON endpoints under `/api`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - Create an account (public)
 * - `POST /api/auth/login` - Sign in (public)
 * - `POST /api/auth/logout` - Clear the session cookie (public)
 * - `GET /api/auth/me` - Current account
 *
 * ## Student
 * - `GET|PUT /api/student/settings`
 *
 * ## Teams, Events, Posts
 * - `GET|POST /api/teams`, `GET /api/teams/{id}`, `POST /api/teams/{id}/join`
 * - `GET|POST /api/events`, `DELETE /api/events/{id}`
 * - `GET|POST /api/posts`, `DELETE /api/posts/{id}`
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::dashboard::{get_settings, update_settings};
use crate::backend::events::{create_event, delete_event, list_events};
use crate::backend::posts::{create_post, delete_post, list_posts};
use crate::backend::server::state::AppState;
use crate::backend::teams::{create_team, get_team, join_team, list_teams};

/// Configure API routes
///
/// Whether a request reaches these handlers at all is decided by the
/// authentication middleware; role checks happen inside the handlers.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(get_me))
        .route("/api/student/settings", get(get_settings).put(update_settings))
        .route("/api/teams", get(list_teams).post(create_team))
        .route("/api/teams/{id}", get(get_team))
        .route("/api/teams/{id}/join", post(join_team))
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", delete(delete_event))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", delete(delete_post))
}
