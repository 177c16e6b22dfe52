//! Scored measurement triple
//!
//! The scored counterpart of `WeatherSample`: one normalized score per raw
//! quantity. Hours get theirs from the scoring functions, segments from
//! aggregation over their hours.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Score;

/// Comfort scores for one time period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Temperature comfort score
    pub temperature: Score,
    /// Wind comfort score
    pub wind: Score,
    /// Precipitation comfort score
    pub precipitation: Score,
}

impl ScoreCard {
    /// Create a new score card
    #[must_use]
    pub const fn new(temperature: Score, wind: Score, precipitation: Score) -> Self {
        Self {
            temperature,
            wind,
            precipitation,
        }
    }
}

impl fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temp {}, wind {}, precip {}",
            self.temperature, self.wind, self.precipitation
        )
    }
}
