//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `SATBOARD_DATABASE` and
//! `SATBOARD_BIND` override the file when set.
//!
//! # Example
//!
//! ```no_run
//! use satboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use super::database::DatabaseConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`DatabaseConfig::path`].
pub const DATABASE_ENV: &str = "SATBOARD_DATABASE";

/// Environment variable overriding [`ServerConfig::bind`].
pub const BIND_ENV: &str = "SATBOARD_BIND";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the configuration was read from; `None` for defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = Self::from_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::from_toml(&content)?;
        config.source = Some(path.to_path_buf());
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Like [`Self::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file is malformed or validation fails.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Initialize the global tracing subscriber from [`Self::logging`] and
    /// report where the configuration came from.
    pub fn init_logging(&self) {
        self.logging.init();
        match &self.source {
            Some(path) => info!(path = %path.display(), "Loaded configuration"),
            None => info!("No config file found, using defaults"),
        }
    }

    /// The listener address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(DATABASE_ENV) {
            self.database.path = path;
        }
        if let Ok(bind) = std::env::var(BIND_ENV) {
            self.server.bind = bind;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.path",
            }
            .into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected one of {:?}", LoggingConfig::FORMATS),
            }
            .into());
        }
        Ok(())
    }
}
