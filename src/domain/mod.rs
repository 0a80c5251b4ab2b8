//! Storage-agnostic domain types for the score board.
//!
//! - [`score`] - the bounded exam score and the pass mark
//! - [`record`] - stored score records and the inputs that create or change them
//! - [`rank`] - dense ranking over a set of scores
//! - [`error`] - validation errors raised before anything touches the store

pub mod error;
pub mod rank;
pub mod record;
pub mod score;

pub use error::DomainError;
pub use rank::dense_ranks;
pub use record::{Location, LocationPatch, NewScoreRecord, RecordId, ScoreRecord, ScoreUpdate};
pub use score::{Score, PASS_MARK};
