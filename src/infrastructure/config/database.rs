//! Database configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::PoolOptions;

/// SQLite file and pool settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (`:memory:` for a throwaway database).
    pub path: String,
    /// Maximum pooled connections.
    pub pool_size: u32,
    /// Lock wait before a statement fails with `SQLITE_BUSY`.
    pub busy_timeout_ms: u64,
}

impl DatabaseConfig {
    /// Pool settings derived from this configuration.
    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.pool_size,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "sat_scores.db".into(),
            pool_size: 5,
            busy_timeout_ms: 5000,
        }
    }
}
