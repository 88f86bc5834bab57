/**
 * Router Configuration
 *
 * Combines page and API routes into a single Axum router and wraps all of
 * it, static files and the 404 fallback included, in the authentication
 * middleware.
 *
 * # Layer Order
 *
 * Requests pass through tracing first and the authentication middleware
 * second. Every route sees the middleware; the route classifier decides
 * which paths need a credential.
 */

use axum::{middleware::from_fn_with_state, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::not_found;
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Directory served under `/static`
pub const STATIC_DIR: &str = "public";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_page_routes(Router::new());
    let router = configure_api_routes(router);

    let router = router
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found);

    router
        .layer(from_fn_with_state(app_state.clone(), auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
