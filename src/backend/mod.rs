//! Backend Module
//!
//! Server-side code for the sports hub: the Axum server, the session auth
//! gate and the hub's JSON API.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, state and startup
//! - **`routes`** - Router assembly
//! - **`middleware`** - Route classification and the authentication middleware
//! - **`auth`** - Session tokens, credential extraction, accounts
//! - **`dashboard`** - Role dashboards and student settings
//! - **`teams`**, **`events`**, **`posts`** - Hub resources
//! - **`error`** - Handler error type and its HTTP rendering

pub mod server;

pub mod routes;

pub mod error;

pub mod auth;

pub mod middleware;

pub mod dashboard;

pub mod teams;

pub mod events;

pub mod posts;

pub use error::BackendError;
pub use server::create_app;
