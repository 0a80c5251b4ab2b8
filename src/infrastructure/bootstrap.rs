//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::inbound::http::AppState;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteScoreStore;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;

/// Open the configured database, apply pending migrations and wrap the pool
/// in a store.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or a migration fails.
pub fn open_store(config: &DatabaseConfig) -> Result<SqliteScoreStore> {
    let pool = create_pool(&config.path, config.pool_options())?;
    run_migrations(&pool)?;
    info!(path = %config.path, pool_size = config.pool_size, "Database ready");
    Ok(SqliteScoreStore::new(pool))
}

/// Build the shared request state over a store.
pub fn build_state(store: SqliteScoreStore) -> AppState<SqliteScoreStore> {
    AppState::new(Arc::new(store))
}
