//! Authentication Module
//!
//! Session tokens, credential extraction, role checks, user accounts and the
//! HTTP handlers for signing up, logging in and out.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError taxonomy
//! ├── sessions.rs     - Token codec: issue and verify session tokens
//! ├── gate.rs         - Auth gate: extract_credential, authenticate, authorize
//! ├── cookies.rs      - Session cookie header values
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── users.rs        - User model and database operations
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup/Login**: credentials checked → token issued → returned in the
//!    body and set as the `token` cookie
//! 2. **Every request**: the middleware classifies the path and runs the
//!    gate; protected paths without a valid credential are redirected
//! 3. **Every protected handler**: re-runs the gate through `AuthUser` and
//!    checks the role with `authorize`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with a secret loaded once at startup
//! - Tokens expire after 7 days by default
//! - Clients never learn why a credential was rejected

/// Authentication error taxonomy
pub mod error;

/// Session token codec
pub mod sessions;

/// Credential extraction and role checks
pub mod gate;

/// Session cookie helpers
pub mod cookies;

/// Password hashing
pub mod passwords;

/// User data model and database operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use error::AuthError;
pub use gate::{authenticate, authorize, extract_credential};
pub use handlers::{get_me, login, logout, signup};
pub use handlers::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use sessions::{AuthenticatedUser, Claims, TokenCodec};
