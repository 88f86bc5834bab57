//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{not_found, HandlerResult};
pub use types::BackendError;
