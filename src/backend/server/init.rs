/**
 * Server Initialization
 *
 * Builds the application state and router from a validated configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database, if one is configured, and run migrations
 * 2. Build `AppState` (token codec, route classifier, pool)
 * 3. Create and configure the router
 *
 * A missing or unreachable database does not stop startup: routes that
 * need storage answer a generic 500 while the auth gate keeps working.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing sports hub backend");

    let db_pool = load_database(&config).await;
    let app_state = AppState::new(config, db_pool);

    tracing::info!(
        "Auth gate ready: {} public prefixes, {} protected prefixes, login at {}",
        app_state.classifier.public_prefixes().len(),
        app_state.classifier.protected_prefixes().len(),
        app_state.config.login_path
    );

    create_router(app_state)
}
