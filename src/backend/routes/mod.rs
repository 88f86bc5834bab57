//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Router assembly and middleware layers
//! ├── page_routes.rs  - Landing, login, health and dashboards
//! └── api_routes.rs   - JSON API endpoints
//! ```

/// Main router creation
pub mod router;

/// Page routes
pub mod page_routes;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
