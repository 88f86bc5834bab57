/**
 * Application State Management
 *
 * This module defines the state shared by the middleware and every
 * handler.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The server configuration
 * - The session token codec (signing secret + TTL)
 * - The route classifier
 * - The optional database pool
 *
 * # Thread Safety
 *
 * Everything except the pool is built once before the listener binds and
 * shared read-only behind `Arc`. No locks are needed. `PgPool` is itself
 * a cheap, thread-safe handle.
 */

use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;
use crate::backend::middleware::routes::RouteClassifier;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Immutable server configuration
    pub config: Arc<ServerConfig>,

    /// Session token codec built from the configured secret
    pub tokens: Arc<TokenCodec>,

    /// Public/protected path policy used by the auth middleware
    pub classifier: Arc<RouteClassifier>,

    /// Database connection pool
    ///
    /// This is `None` if the database is not configured. Handlers should
    /// check for `None` before using the database.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Build state from configuration and an optional pool
    pub fn new(config: ServerConfig, db_pool: Option<PgPool>) -> Self {
        let tokens = TokenCodec::new(config.jwt_secret.as_bytes(), config.token_ttl);
        let classifier = config.classifier();
        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            classifier: Arc::new(classifier),
            db_pool,
        }
    }

    /// Database pool, or a generic 500 if none is configured
    pub fn db(&self) -> Result<&PgPool, BackendError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            BackendError::database_unavailable()
        })
    }

    /// Name of the session cookie
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }
}
