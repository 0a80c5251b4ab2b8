use std::path::{Path, PathBuf};
use std::sync::Arc;

use satboard::adapter::outbound::sqlite::SqliteScoreStore;
use satboard::infrastructure::bootstrap::open_store;
use satboard::infrastructure::config::database::DatabaseConfig;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests, migrated and ready.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    store: Arc<SqliteScoreStore>,
}

impl TempDb {
    pub fn create() -> Self {
        Self::with_pool_size(4)
    }

    pub fn with_pool_size(pool_size: u32) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sat_scores.db");

        let config = DatabaseConfig {
            path: path.display().to_string(),
            pool_size,
            busy_timeout_ms: 5000,
        };
        let store = open_store(&config).expect("open sqlite store");

        Self {
            _dir: dir,
            path,
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> Arc<SqliteScoreStore> {
        Arc::clone(&self.store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
