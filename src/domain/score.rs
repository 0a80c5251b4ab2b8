//! Exam score value type.
//!
//! A [`Score`] is always within `0..=100`; the range is checked once, at
//! construction, so every later consumer can rely on it.
//!
//! # Examples
//!
//! ```
//! use satboard::domain::Score;
//!
//! let score = Score::parse(" 42 ").unwrap();
//! assert_eq!(score.value(), 42);
//! assert!(score.passed());
//!
//! assert!(Score::parse("abc").is_err());
//! assert!(Score::try_new(-1).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Lowest score that counts as a pass.
pub const PASS_MARK: u8 = 30;

/// Highest accepted score.
const MAX_SCORE: i64 = 100;

/// An exam score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting values outside `0..=100`.
    ///
    /// # Errors
    /// Returns [`DomainError::ScoreOutOfRange`] for out-of-range values.
    pub fn try_new(value: i64) -> Result<Self, DomainError> {
        if !(0..=MAX_SCORE).contains(&value) {
            return Err(DomainError::ScoreOutOfRange { value });
        }
        // Range checked above.
        Ok(Self(value as u8))
    }

    /// Parse a score from submitted form text.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] for blank input,
    /// [`DomainError::InvalidNumber`] for non-numeric input and
    /// [`DomainError::ScoreOutOfRange`] for out-of-range values.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingField { field: "sat_score" });
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidNumber {
                field: "sat_score",
                value: raw.to_string(),
            })?;
        Self::try_new(value)
    }

    /// The raw score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this score meets the pass mark.
    #[must_use]
    pub const fn passed(self) -> bool {
        self.0 >= PASS_MARK
    }
}

impl TryFrom<i64> for Score {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Score::try_new(0).unwrap().value(), 0);
        assert_eq!(Score::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Score::try_new(-1),
            Err(DomainError::ScoreOutOfRange { value: -1 })
        );
        assert_eq!(
            Score::try_new(101),
            Err(DomainError::ScoreOutOfRange { value: 101 })
        );
    }

    #[test]
    fn pass_mark_is_inclusive() {
        assert!(!Score::try_new(29).unwrap().passed());
        assert!(Score::try_new(30).unwrap().passed());
        assert!(Score::try_new(100).unwrap().passed());
        assert!(!Score::try_new(0).unwrap().passed());
    }

    #[test]
    fn passed_matches_rule_for_every_score() {
        for value in 0..=100 {
            let score = Score::try_new(value).unwrap();
            assert_eq!(score.passed(), value >= 30, "score {value}");
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Score::parse("  75\n").unwrap().value(), 75);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Score::parse("7.5"),
            Err(DomainError::InvalidNumber { field: "sat_score", .. })
        ));
        assert!(matches!(
            Score::parse("ninety"),
            Err(DomainError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parse_rejects_blank() {
        assert_eq!(
            Score::parse("   "),
            Err(DomainError::MissingField { field: "sat_score" })
        );
    }

    #[test]
    fn parse_range_checks_after_parsing() {
        assert_eq!(
            Score::parse("-1"),
            Err(DomainError::ScoreOutOfRange { value: -1 })
        );
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: Score = serde_json::from_str("88").unwrap();
        assert_eq!(ok.value(), 88);
        assert!(serde_json::from_str::<Score>("150").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "88");
    }
}
