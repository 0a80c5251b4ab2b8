//! Domain validation errors.
//!
//! Raised by the `parse`/`try_new` constructors in [`super::score`] and
//! [`super::record`] before a transaction is opened, so a rejected input
//! never leaves a trace in the store.
//!
//! ```
//! use satboard::domain::{DomainError, Score};
//!
//! assert!(matches!(
//!     Score::try_new(101),
//!     Err(DomainError::ScoreOutOfRange { value: 101 })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when submitted input violates a domain rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Score outside the accepted 0-100 range.
    #[error("score {value} out of range (0-100)")]
    ScoreOutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// A numeric field could not be parsed.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Form field name.
        field: &'static str,
        /// Raw submitted text.
        value: String,
    },

    /// A required field was missing or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Form field name.
        field: &'static str,
    },
}
