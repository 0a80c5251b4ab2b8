//! Form and query-string payloads.
//!
//! Everything arrives as text so that validation errors come from the
//! domain constructors rather than from the extractor.

use serde::Deserialize;

use crate::domain::record::required;
use crate::domain::{DomainError, Location, LocationPatch, NewScoreRecord, Score, ScoreUpdate};

/// Body of `POST /api/submit-sat-score`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub pincode: String,
    #[serde(alias = "score")]
    pub sat_score: String,
}

impl ScoreForm {
    /// Validate into an insert request.
    ///
    /// # Errors
    /// The first missing or malformed field.
    pub fn into_new_record(self) -> Result<NewScoreRecord, DomainError> {
        let name = required("name", &self.name)?;
        let location = Location::try_new(&self.address, &self.city, &self.country, &self.pincode)?;
        let score = Score::parse(&self.sat_score)?;
        NewScoreRecord::try_new(&name, location, score)
    }
}

/// Body of `POST /api/update-sat-score`. Location fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateScoreForm {
    pub name: String,
    #[serde(alias = "score")]
    pub sat_score: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub pincode: Option<String>,
}

impl UpdateScoreForm {
    /// Validate into an update request.
    ///
    /// # Errors
    /// A missing name or a malformed score.
    pub fn into_update(self) -> Result<ScoreUpdate, DomainError> {
        let name = required("name", &self.name)?;
        let score = Score::parse(&self.sat_score)?;
        let patch = LocationPatch::from_optional(
            self.address.as_deref(),
            self.city.as_deref(),
            self.country.as_deref(),
            self.pincode.as_deref(),
        );
        Ok(ScoreUpdate::try_new(&name, score)?.with_location(patch))
    }
}

/// `?name=` query parameter.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NameQuery {
    pub name: String,
}

impl NameQuery {
    /// The trimmed name, rejecting blanks.
    ///
    /// # Errors
    /// [`DomainError::MissingField`] when blank.
    pub fn required(&self) -> Result<String, DomainError> {
        required("name", &self.name)
    }
}
