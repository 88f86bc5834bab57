//! Sports Hub - Main Library
//!
//! Backend for a university sports hub with three account roles
//! (STUDENT, COACH, ADMIN). The core of the crate is its session auth gate:
//! a signed, expiring session token, a policy that decides which paths need
//! one, and a role check for the handlers that need a specific role.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependency
//!   - `Role` and its wire form
//!   - Input validation errors
//!
//! - **`backend`** - Axum server
//!   - Token codec, credential extraction, authorization
//!   - Request middleware and route classification
//!   - Accounts, dashboards, teams, events and posts
//!
//! # Usage
//!
//! ```rust,no_run
//! use sportshub::backend::auth::TokenCodec;
//! use sportshub::shared::Role;
//!
//! let codec = TokenCodec::new(b"dev-secret", chrono::Duration::days(7));
//! let token = codec.issue("7d0f5a52-0b5e-4a53-9a43-1f8a3c2d9e10", "coach@uni.edu", Role::Coach)?;
//! let identity = codec.verify(&token)?;
//! assert_eq!(identity.role, Role::Coach);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation
//! - `backend::auth::AuthError` for the auth gate
//! - `backend::error::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
