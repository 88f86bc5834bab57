/**
 * Page Routes
 *
 * Non-API routes: the landing and login descriptors, the health check and
 * the three role dashboards. Pages are rendered by a separate frontend;
 * these handlers only tell it what the server expects.
 */

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::backend::dashboard::{admin_dashboard, coach_dashboard, student_dashboard};
use crate::backend::server::state::AppState;

/// Page descriptor returned by `/` and `/login`
#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub page: &'static str,
    pub endpoints: Vec<&'static str>,
}

async fn home() -> Json<PageInfo> {
    Json(PageInfo {
        page: "home",
        endpoints: vec!["/login", "/signup", "/api/auth/login", "/api/auth/signup"],
    })
}

async fn login_page() -> Json<PageInfo> {
    Json(PageInfo {
        page: "login",
        endpoints: vec!["/api/auth/login"],
    })
}

async fn signup_page() -> Json<PageInfo> {
    Json(PageInfo {
        page: "signup",
        endpoints: vec!["/api/auth/signup"],
    })
}

async fn health() -> &'static str {
    "ok"
}

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/login", get(login_page))
        .route("/signup", get(signup_page))
        .route("/health", get(health))
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/coach/dashboard", get(coach_dashboard))
        .route("/student/dashboard", get(student_dashboard))
}
