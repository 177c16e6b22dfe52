//! Scoring functions
//!
//! Pure, stateless mappings from raw measurements to normalized comfort
//! scores. Temperature and wind use fixed comfort curves; precipitation is
//! a table lookup supplied as configuration. The curve constants are
//! tunable policy, not physical law.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::DomainError;
use crate::value_objects::{ConditionCode, Score};

/// Lower edge of the temperature comfort band in Celsius
pub const COMFORT_BAND_LOW_C: f64 = 16.0;

/// Upper edge of the temperature comfort band in Celsius
pub const COMFORT_BAND_HIGH_C: f64 = 21.0;

/// Score lost per degree of distance from the comfort band
pub const TEMPERATURE_FALLOFF_PER_C: f64 = 0.5;

/// Wind speed at or below which conditions count as calm, in m/s
pub const CALM_WIND_MPS: f64 = 2.0;

/// Score lost per m/s of wind above the calm threshold
pub const WIND_FALLOFF_PER_MPS: f64 = 0.75;

/// Score a feels-like temperature for outdoor comfort
///
/// Full marks inside the comfort band; outside it the score falls linearly
/// with distance from the nearer band edge and saturates at zero. Total
/// over the whole real line: any input yields an in-range score.
#[must_use]
pub fn temperature_score(temp_c: f64) -> Score {
    if temp_c.is_nan() {
        return Score::clamped(temp_c);
    }
    let distance = if temp_c < COMFORT_BAND_LOW_C {
        COMFORT_BAND_LOW_C - temp_c
    } else if temp_c > COMFORT_BAND_HIGH_C {
        temp_c - COMFORT_BAND_HIGH_C
    } else {
        0.0
    };
    Score::clamped(TEMPERATURE_FALLOFF_PER_C.mul_add(-distance, Score::MAX))
}

/// Score a wind speed for outdoor comfort
///
/// Full marks at or below the calm threshold, then falls linearly and
/// saturates at zero.
///
/// # Errors
///
/// Returns `InvalidMeasurement` for negative or non-finite input; wind
/// speed is a magnitude and cannot be negative.
pub fn wind_score(wind_mps: f64) -> Result<Score, DomainError> {
    if !wind_mps.is_finite() || wind_mps < 0.0 {
        return Err(DomainError::invalid_measurement("wind speed", wind_mps));
    }
    let excess = (wind_mps - CALM_WIND_MPS).max(0.0);
    Ok(Score::clamped(WIND_FALLOFF_PER_MPS.mul_add(
        -excess,
        Score::MAX,
    )))
}

/// Default condition scores over the OpenWeather condition-id catalogue
///
/// Thunderstorms and violent weather lowest, clear sky highest.
const DEFAULT_CONDITION_SCORES: &[(u16, f64)] = &[
    // Thunderstorm (2xx)
    (200, 0.0),
    (201, 0.0),
    (202, 0.0),
    (210, 0.0),
    (211, 0.0),
    (212, 0.0),
    (221, 0.0),
    (230, 0.0),
    (231, 0.0),
    (232, 0.0),
    // Drizzle (3xx)
    (300, 4.0),
    (301, 4.0),
    (302, 3.0),
    (310, 4.0),
    (311, 3.0),
    (312, 3.0),
    (313, 3.0),
    (314, 2.0),
    (321, 3.0),
    // Rain (5xx)
    (500, 3.0),
    (501, 2.0),
    (502, 1.0),
    (503, 0.0),
    (504, 0.0),
    (511, 0.0),
    (520, 2.0),
    (521, 2.0),
    (522, 1.0),
    (531, 1.0),
    // Snow (6xx)
    (600, 2.0),
    (601, 1.0),
    (602, 0.0),
    (611, 1.0),
    (612, 1.0),
    (613, 1.0),
    (615, 1.0),
    (616, 1.0),
    (620, 1.0),
    (621, 1.0),
    (622, 0.0),
    // Atmosphere (7xx)
    (701, 6.0),
    (711, 5.0),
    (721, 6.0),
    (731, 4.0),
    (741, 5.0),
    (751, 4.0),
    (761, 4.0),
    (762, 0.0),
    (771, 1.0),
    (781, 0.0),
    // Clear and clouds (800-804)
    (800, 10.0),
    (801, 9.0),
    (802, 8.0),
    (803, 7.0),
    (804, 6.0),
];

/// Lookup table from precipitation condition code to comfort score
///
/// Supplied as configuration. Lookups of codes absent from the table fail
/// loudly so gaps are caught in testing instead of masked by a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PrecipitationTable {
    scores: HashMap<ConditionCode, Score>,
}

impl PrecipitationTable {
    /// Build a table from code/score pairs
    #[must_use]
    pub fn from_scores(scores: impl IntoIterator<Item = (ConditionCode, Score)>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Look up the score for a condition code
    ///
    /// # Errors
    ///
    /// Returns `UnknownConditionCode` if the code is not in the table.
    pub fn score(&self, code: ConditionCode) -> Result<Score, DomainError> {
        self.scores
            .get(&code)
            .copied()
            .ok_or(DomainError::UnknownConditionCode(code))
    }

    /// Check whether the table contains a code
    #[must_use]
    pub fn contains(&self, code: ConditionCode) -> bool {
        self.scores.contains_key(&code)
    }

    /// Number of codes in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for PrecipitationTable {
    fn default() -> Self {
        Self::from_scores(
            DEFAULT_CONDITION_SCORES
                .iter()
                .map(|&(id, score)| (ConditionCode::new(id), Score::clamped(score))),
        )
    }
}

/// Custom deserialization that validates every score in the table
impl<'de> Deserialize<'de> for PrecipitationTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = HashMap::<u16, f64>::deserialize(deserializer)?;
        let mut scores = HashMap::with_capacity(raw.len());
        for (id, value) in raw {
            let score = Score::new(value).map_err(serde::de::Error::custom)?;
            scores.insert(ConditionCode::new(id), score);
        }
        Ok(Self { scores })
    }
}
