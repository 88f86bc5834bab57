//! Shared Types
//!
//! Types that do not depend on the HTTP layer or the database:
//!
//! - **`role`** - The `Role` enum carried in session tokens and user records
//! - **`error`** - Validation errors (`SharedError`)

pub mod error;

pub mod role;

pub use error::SharedError;
pub use role::Role;
