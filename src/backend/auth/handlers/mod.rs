//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear session cookie
//! - **`get_me`** - GET /api/auth/me - Get current user info

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
