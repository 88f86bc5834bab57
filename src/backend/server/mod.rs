//! Server Module
//!
//! Configuration, shared state and startup for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState
//! ├── config.rs       - Configuration loading (defaults, file, environment)
//! └── init.rs         - Database connection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::load()` layers defaults, an
//!    optional TOML file and environment variables, and refuses to start
//!    without a signing secret
//! 2. **Database**: optional; migrations run on connect
//! 3. **State Creation**: token codec and route classifier are built once
//! 4. **Router Creation**: routes plus the authentication middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use sportshub::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let addr = config.bind_address();
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
