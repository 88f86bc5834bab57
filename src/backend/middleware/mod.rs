//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`routes`** - Route classifier: which paths are public or protected
//! - **`auth`** - Authentication middleware and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, Router};
//! use sportshub::backend::middleware::auth_middleware;
//! use sportshub::backend::server::AppState;
//!
//! fn protect(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub mod routes;

pub use auth::{auth_middleware, evaluate, AuthUser, GateDecision};
pub use routes::{RouteClass, RouteClassifier};
