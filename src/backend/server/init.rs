/**
 * Server Initialization
 *
 * Assembles the application: pick a store, build the token service, wire
 * the router.
 *
 * # Store Selection
 *
 * If `DATABASE_URL` is configured the Postgres store is used; connection
 * or migration failures fall back to the in-memory store with a warning
 * rather than preventing startup. The in-memory store loses everything on
 * restart, so the fallback is only fit for development.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::TokenService;
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store};

/// Create the Axum application from configuration
pub async fn create_app(config: &ServerConfig) -> Router {
    let store = load_store(config).await;
    let tokens = TokenService::new(config.token_secret.clone(), config.token_ttl_secs());

    create_router(AppState::new(store, tokens))
}

/// Connect the configured store, falling back to in-memory
async fn load_store(config: &ServerConfig) -> Arc<dyn Store> {
    let Some(url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using in-memory store; data will not survive restart");
        return Arc::new(MemoryStore::new());
    };

    tracing::info!("connecting to database...");
    match PgStore::connect(url).await {
        Ok(store) => {
            tracing::info!("database connected, migrations applied");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("database connection failed: {e:?}");
            tracing::warn!("falling back to in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}
