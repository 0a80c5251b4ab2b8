//! Command-line interface definitions.
//!
//! `serve` runs the web application, `migrate` and `rerank` are
//! maintenance commands against the same database.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// SAT score board: record scores, keep ranks, serve the UI
#[derive(Parser, Debug)]
#[command(name = "satboard")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply when it does not exist).
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migrations and serve HTTP until interrupted
    Serve(ServeArgs),

    /// Apply pending migrations and exit
    Migrate(DatabaseArgs),

    /// Recompute every rank and print the table
    Rerank(RerankArgs),
}

/// Arguments for `serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the listen address (e.g. 0.0.0.0:8080).
    #[arg(long)]
    pub bind: Option<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Database selection shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct DatabaseArgs {
    /// Override the SQLite database path.
    #[arg(long)]
    pub database: Option<String>,
}

/// Arguments for `rerank`.
#[derive(Args, Debug, Default)]
pub struct RerankArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Print the table as JSON.
    #[arg(long)]
    pub json: bool,
}
