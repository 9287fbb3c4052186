/**
 * Server Initialization
 *
 * Builds the Axum application from configuration:
 *
 * 1. Open the database and apply the schema
 * 2. Create the shared `AppState`
 * 3. Assemble the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or the schema cannot be applied.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing kanban board server");

    let db_pool = load_database(config).await?;
    let app_state = AppState::new(db_pool, config.jwt_secret.as_str());

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
