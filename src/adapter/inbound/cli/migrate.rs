//! Handler for the `migrate` command.

use tracing::info;

use super::command::DatabaseArgs;
use super::with_database;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Apply pending migrations and exit.
pub fn execute(config: Config, args: &DatabaseArgs) -> Result<()> {
    let config = with_database(config, args.database.as_deref())?;
    config.init_logging();

    let pool = create_pool(&config.database.path, config.database.pool_options())?;
    run_migrations(&pool)?;
    info!(path = %config.database.path, "Migrations up to date");
    Ok(())
}
