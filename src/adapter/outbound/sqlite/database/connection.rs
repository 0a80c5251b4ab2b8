//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! pragmas for SQLite databases.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Database URL that opens a private in-memory database per connection.
const IN_MEMORY: &str = ":memory:";

/// Pool sizing and per-connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum number of pooled connections.
    pub max_size: u32,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: 5,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

/// Applies the connection pragmas to every new pooled connection.
#[derive(Debug, Clone, Copy)]
struct SqliteCustomizer {
    busy_timeout: Duration,
    /// File databases only; `:memory:` has no journal file.
    wal: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        apply_pragmas(conn, self).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// An in-memory database exists only inside the connection that opened it,
/// so `:memory:` pools are pinned to a single connection.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, options: PoolOptions) -> Result<DbPool> {
    let in_memory = database_url == IN_MEMORY;
    let max_size = if in_memory { 1 } else { options.max_size };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqliteCustomizer {
            busy_timeout: options.busy_timeout,
            wal: !in_memory,
        }))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))?;

    debug!(database_url, max_size, "Created SQLite pool");
    Ok(pool)
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;

    for version in &applied {
        info!(version = %version, "Applied migration");
    }
    Ok(())
}

/// Per-connection pragmas: lock wait, foreign key enforcement and, for file
/// databases, write-ahead logging so readers don't wait on the writer.
fn apply_pragmas(conn: &mut SqliteConnection, settings: &SqliteCustomizer) -> QueryResult<()> {
    diesel::sql_query(format!(
        "PRAGMA busy_timeout={}",
        settings.busy_timeout.as_millis()
    ))
    .execute(conn)?;
    diesel::sql_query("PRAGMA foreign_keys=ON").execute(conn)?;
    if settings.wal {
        diesel::sql_query("PRAGMA journal_mode=WAL").execute(conn)?;
    }
    Ok(())
}
