//! Command-line entry points.

pub mod command;
pub mod migrate;
pub mod rerank;
pub mod serve;

use std::path::Path;

pub use command::{Cli, Commands};

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns the first configuration, database or server error.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    match cli.command {
        Commands::Serve(args) => serve::execute(config, &args).await,
        Commands::Migrate(args) => migrate::execute(config, &args),
        Commands::Rerank(args) => rerank::execute(config, &args).await,
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
}

/// Apply a `--database` override.
fn with_database(mut config: Config, database: Option<&str>) -> Result<Config> {
    if let Some(path) = database {
        config.database.path = path.to_string();
    }
    config.validate()?;
    Ok(config)
}
