//! Hourly observation entity

use serde::Serialize;
use std::fmt;

use crate::value_objects::{HourOfDay, ScoreCard, WeatherSample};

/// One hourly weather observation within a day
///
/// Raw measurements are immutable once the hour is created; scores are
/// populated by the day's scoring pass and recomputed identically on
/// re-scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hour {
    hour: HourOfDay,
    sample: WeatherSample,
    scores: Option<ScoreCard>,
}

impl Hour {
    /// Create a new unscored hour
    #[must_use]
    pub const fn new(hour: HourOfDay, sample: WeatherSample) -> Self {
        Self {
            hour,
            sample,
            scores: None,
        }
    }

    /// Hour of day this observation covers
    #[must_use]
    pub const fn hour(&self) -> HourOfDay {
        self.hour
    }

    /// Raw measurements
    #[must_use]
    pub const fn sample(&self) -> &WeatherSample {
        &self.sample
    }

    /// Comfort scores, present once the scoring pass has run
    #[must_use]
    pub const fn scores(&self) -> Option<&ScoreCard> {
        self.scores.as_ref()
    }

    /// Record the scores computed from this hour's raw measurements
    pub(crate) fn set_scores(&mut self, scores: ScoreCard) {
        self.scores = Some(scores);
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hour at {}", self.hour)
    }
}
