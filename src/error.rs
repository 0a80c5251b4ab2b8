use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected input; raised before any transaction is opened.
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("no record named '{name}'")]
    NotFound { name: String },

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The rank pass failed; the mutation that triggered it was rolled back.
    #[error("rank recompute failed: {0}")]
    RankRecompute(String),

    /// The caller went away before commit; the transaction was rolled back.
    #[error("request cancelled; transaction rolled back")]
    Cancelled,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match err {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::ForeignKeyViolation,
                info,
            ) => Error::ConstraintViolation(info.message().to_string()),
            other => Error::Database(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}

impl Error {
    /// Stable machine-readable code for API responses and log fields.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::InvalidInput(_) => "invalid_input",
            Error::NotFound { .. } => "not_found",
            Error::ConstraintViolation(_) => "constraint_violation",
            Error::RankRecompute(_) => "rank_recompute_failed",
            Error::Cancelled => "cancelled",
            Error::Connection(_) | Error::Database(_) => "database_error",
            Error::Task(_) | Error::Io(_) => "internal_error",
        }
    }
}
