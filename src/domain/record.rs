//! Score records and the validated inputs that create or change them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::score::Score;

/// Store-assigned record identifier.
///
/// Assigned once on insert and never reused, so it is safe to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

impl RecordId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// One examinee's stored score entry.
///
/// `rank` is only meaningful right after a recompute pass; every committed
/// mutation ends with one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    #[serde(rename = "sat_score")]
    pub score: Score,
    pub passed: bool,
    pub rank: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Free-form location fields. Only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
}

impl Location {
    /// Build a location, requiring every field to be non-blank.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] naming the first blank field.
    pub fn try_new(
        address: &str,
        city: &str,
        country: &str,
        pincode: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            address: required("address", address)?,
            city: required("city", city)?,
            country: required("country", country)?,
            pincode: required("pincode", pincode)?,
        })
    }
}

/// Validated input for inserting a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScoreRecord {
    pub name: String,
    pub location: Location,
    pub score: Score,
}

impl NewScoreRecord {
    /// Build an insert request from already-validated parts.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] if the name is blank.
    pub fn try_new(name: &str, location: Location, score: Score) -> Result<Self, DomainError> {
        Ok(Self {
            name: required("name", name)?,
            location,
            score,
        })
    }

    /// Pass flag, fixed at write time.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score.passed()
    }
}

/// Location fields an update may change; `None` leaves the stored value alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationPatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
}

impl LocationPatch {
    /// Build a patch from optional form text; blank values count as absent.
    #[must_use]
    pub fn from_optional(
        address: Option<&str>,
        city: Option<&str>,
        country: Option<&str>,
        pincode: Option<&str>,
    ) -> Self {
        Self {
            address: non_blank(address),
            city: non_blank(city),
            country: non_blank(country),
            pincode: non_blank(pincode),
        }
    }

    /// True when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.pincode.is_none()
    }
}

/// Validated input for updating the record(s) matching `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub name: String,
    pub score: Score,
    pub location: LocationPatch,
}

impl ScoreUpdate {
    /// Build an update request.
    ///
    /// # Errors
    /// Returns [`DomainError::MissingField`] if the name is blank.
    pub fn try_new(name: &str, score: Score) -> Result<Self, DomainError> {
        Ok(Self {
            name: required("name", name)?,
            score,
            location: LocationPatch::default(),
        })
    }

    /// Attach location changes.
    #[must_use]
    pub fn with_location(mut self, location: LocationPatch) -> Self {
        self.location = location;
        self
    }

    /// Pass flag, fixed at write time.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score.passed()
    }
}

/// Trim a required field, rejecting blanks.
///
/// # Errors
/// Returns [`DomainError::MissingField`] for blank input.
pub fn required(field: &'static str, raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
