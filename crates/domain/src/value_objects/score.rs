//! Normalized comfort score value object
//!
//! Represents a validated comfort score in the range 0.0 to 10.0, where
//! higher is more favorable for being outdoors.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Score;
//!
//! let s = Score::new(7.5).expect("valid score");
//! assert!((s.value() - 7.5).abs() < f64::EPSILON);
//!
//! // Out-of-range values return an error
//! assert!(Score::new(10.1).is_err());
//!
//! // Clamp out-of-range values
//! assert!((Score::clamped(12.0).value() - 10.0).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a score value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid score: {0} is out of range (must be 0-10)")]
pub struct InvalidScore(f64);

/// Normalized comfort score (0.0-10.0)
///
/// The unit used by all scoring functions and aggregates; higher means
/// better conditions for an outdoor activity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Score(f64);

impl Score {
    /// Minimum valid score
    pub const MIN: f64 = 0.0;

    /// Maximum valid score
    pub const MAX: f64 = 10.0;

    /// Create a new validated score
    ///
    /// # Errors
    ///
    /// Returns `InvalidScore` if the value is not finite or lies outside
    /// the 0-10 range.
    pub fn new(value: f64) -> Result<Self, InvalidScore> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidScore(value))
        }
    }

    /// Create a score, clamping to the valid range
    ///
    /// Non-finite input (including NaN) clamps to the minimum, so scoring
    /// functions stay total over the whole real line.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(Self::MIN)
        } else {
            Self(value.clamp(Self::MIN, Self::MAX))
        }
    }

    /// Get the score value as an f64
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Round to two decimal places, the precision used by all aggregates
    #[must_use]
    pub fn rounded(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Score {
    type Error = InvalidScore;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// Custom deserialization that validates score values
impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
