//! Segment ranking and interpretation
//!
//! Buckets a day's scored segments into ordered alert tiers and interprets
//! the result for downstream consumers. The composite formula and the tier
//! thresholds are tunable configuration, not fixed policy; the defaults are
//! an unweighted mean with thresholds at 3.0 and 7.0.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::entities::Segment;
use crate::errors::DomainError;
use crate::value_objects::{AlertTier, Score, ScoreCard};

/// Error returned when score weights are unusable
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid score weights: must be finite, non-negative, and not all zero")]
pub struct InvalidScoreWeights;

/// Weights for combining a segment's three scores into one composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    temperature: f64,
    wind: f64,
    precipitation: f64,
}

impl ScoreWeights {
    /// Create validated weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidScoreWeights` if any weight is negative or
    /// non-finite, or if all three are zero.
    pub fn new(temperature: f64, wind: f64, precipitation: f64) -> Result<Self, InvalidScoreWeights> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if !valid(temperature) || !valid(wind) || !valid(precipitation) {
            return Err(InvalidScoreWeights);
        }
        if temperature + wind + precipitation == 0.0 {
            return Err(InvalidScoreWeights);
        }
        Ok(Self {
            temperature,
            wind,
            precipitation,
        })
    }

    /// Temperature weight
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Wind weight
    #[must_use]
    pub const fn wind(&self) -> f64 {
        self.wind
    }

    /// Precipitation weight
    #[must_use]
    pub const fn precipitation(&self) -> f64 {
        self.precipitation
    }

    /// Weighted mean of a score card, rounded to two decimals
    #[must_use]
    pub fn composite(&self, scores: &ScoreCard) -> Score {
        let total = self.temperature * scores.temperature.value()
            + self.wind * scores.wind.value()
            + self.precipitation * scores.precipitation.value();
        let weight_sum = self.temperature + self.wind + self.precipitation;
        Score::clamped(total / weight_sum).rounded()
    }
}

impl Default for ScoreWeights {
    /// Unweighted mean
    fn default() -> Self {
        Self {
            temperature: 1.0,
            wind: 1.0,
            precipitation: 1.0,
        }
    }
}

/// Custom deserialization that validates the weights
impl<'de> Deserialize<'de> for ScoreWeights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            temperature: f64,
            wind: f64,
            precipitation: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.temperature, raw.wind, raw.precipitation).map_err(serde::de::Error::custom)
    }
}

/// Error returned when tier thresholds are out of order
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("invalid thresholds: amber_from ({amber_from}) must be below green_from ({green_from})")]
pub struct InvalidThresholds {
    /// Lower threshold that was supplied
    pub amber_from: f64,
    /// Upper threshold that was supplied
    pub green_from: f64,
}

/// Tier thresholds and composite weights for ranking a day's segments
///
/// A composite at or above `green_from` ranks Green, at or above
/// `amber_from` ranks Amber, and anything below ranks Red.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingPolicy {
    amber_from: Score,
    green_from: Score,
    weights: ScoreWeights,
}

impl RankingPolicy {
    /// Default lower threshold (Amber starts here)
    pub const DEFAULT_AMBER_FROM: f64 = 3.0;

    /// Default upper threshold (Green starts here)
    pub const DEFAULT_GREEN_FROM: f64 = 7.0;

    /// Create a validated policy
    ///
    /// # Errors
    ///
    /// Returns `InvalidThresholds` unless `amber_from < green_from`.
    pub fn new(
        amber_from: Score,
        green_from: Score,
        weights: ScoreWeights,
    ) -> Result<Self, InvalidThresholds> {
        if amber_from >= green_from {
            return Err(InvalidThresholds {
                amber_from: amber_from.value(),
                green_from: green_from.value(),
            });
        }
        Ok(Self {
            amber_from,
            green_from,
            weights,
        })
    }

    /// Lower threshold: composites at or above it avoid Red
    #[must_use]
    pub const fn amber_from(&self) -> Score {
        self.amber_from
    }

    /// Upper threshold: composites at or above it rank Green
    #[must_use]
    pub const fn green_from(&self) -> Score {
        self.green_from
    }

    /// The configured composite weights
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Composite score for a segment's score card
    #[must_use]
    pub fn composite(&self, scores: &ScoreCard) -> Score {
        self.weights.composite(scores)
    }

    /// The alert tier a composite score lands in
    #[must_use]
    pub fn tier_for(&self, composite: Score) -> AlertTier {
        if composite >= self.green_from {
            AlertTier::Green
        } else if composite >= self.amber_from {
            AlertTier::Amber
        } else {
            AlertTier::Red
        }
    }
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            amber_from: Score::clamped(Self::DEFAULT_AMBER_FROM),
            green_from: Score::clamped(Self::DEFAULT_GREEN_FROM),
            weights: ScoreWeights::default(),
        }
    }
}

/// Custom deserialization that validates threshold ordering
impl<'de> Deserialize<'de> for RankingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            amber_from: Score,
            green_from: Score,
            #[serde(default)]
            weights: ScoreWeights,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.amber_from, raw.green_from, raw.weights).map_err(serde::de::Error::custom)
    }
}

/// A segment's entry in the tier ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSegment {
    /// Segment name
    pub name: String,
    /// Composite score that decided the tier
    pub composite: Score,
}

impl RankedSegment {
    /// Create a ranked segment entry
    #[must_use]
    pub fn new(name: impl Into<String>, composite: Score) -> Self {
        Self {
            name: name.into(),
            composite,
        }
    }
}

/// Ordered tier-to-segments mapping for one day
///
/// Within each tier, segments keep their configured order. Empty tiers are
/// valid; consumers must handle them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    green: Vec<RankedSegment>,
    amber: Vec<RankedSegment>,
    red: Vec<RankedSegment>,
}

impl Rankings {
    /// Build rankings from per-tier segment lists
    #[must_use]
    pub const fn from_tiers(
        green: Vec<RankedSegment>,
        amber: Vec<RankedSegment>,
        red: Vec<RankedSegment>,
    ) -> Self {
        Self { green, amber, red }
    }

    /// Segments assigned to a tier, in configured order
    #[must_use]
    pub fn tier(&self, tier: AlertTier) -> &[RankedSegment] {
        match tier {
            AlertTier::Green => &self.green,
            AlertTier::Amber => &self.amber,
            AlertTier::Red => &self.red,
        }
    }

    /// Iterate tiers in ranking order with their segments
    pub fn iter(&self) -> impl Iterator<Item = (AlertTier, &[RankedSegment])> {
        AlertTier::all()
            .into_iter()
            .map(move |tier| (tier, self.tier(tier)))
    }

    /// Check whether every tier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.amber.is_empty() && self.red.is_empty()
    }

    /// Total number of ranked segments across all tiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.green.len() + self.amber.len() + self.red.len()
    }

    pub(crate) fn push(&mut self, tier: AlertTier, segment: RankedSegment) {
        match tier {
            AlertTier::Green => self.green.push(segment),
            AlertTier::Amber => self.amber.push(segment),
            AlertTier::Red => self.red.push(segment),
        }
    }

    /// Interpret the rankings for downstream consumers
    ///
    /// The preferred list holds the names in the best non-empty tier; the
    /// alert level is that tier. When every tier is empty both lists are
    /// empty and the alert level is absent, which is a valid outcome.
    #[must_use]
    pub fn interpret(&self) -> RankingSummary {
        let mut preferred = Vec::new();
        let mut all_segments = Vec::new();
        let mut alert_level = None;

        for (tier, segments) in self.iter() {
            if segments.is_empty() {
                continue;
            }
            if alert_level.is_none() {
                alert_level = Some(tier);
                preferred = segments.iter().map(|s| s.name.clone()).collect();
            }
            all_segments.extend(segments.iter().map(|s| s.name.clone()));
        }

        RankingSummary {
            preferred,
            alert_level,
            all_segments,
        }
    }
}

impl fmt::Display for Rankings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (tier, segments) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
            write!(f, "{}: [{}]", tier, names.join(", "))?;
        }
        Ok(())
    }
}

/// Interpreted ranking output for the message and chart consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    /// Names in the best non-empty tier, in configured order
    pub preferred: Vec<String>,
    /// The tier the preferred list came from, absent when all tiers are empty
    pub alert_level: Option<AlertTier>,
    /// Names across all non-empty tiers, in tier order
    pub all_segments: Vec<String>,
}

/// Assign every scored segment to an alert tier
///
/// Preserves the segments' configured order within each tier. Re-running
/// over unchanged scores yields an identical mapping.
///
/// # Errors
///
/// Returns `UnscoredSegment` if any segment's scores have not been
/// aggregated yet.
pub fn rank_segments(
    segments: &[Segment],
    policy: &RankingPolicy,
) -> Result<Rankings, DomainError> {
    let mut rankings = Rankings::default();
    for segment in segments {
        let scores = segment
            .scores()
            .ok_or_else(|| DomainError::unscored_segment(segment.name()))?;
        let composite = policy.composite(scores);
        let tier = policy.tier_for(composite);
        rankings.push(tier, RankedSegment::new(segment.name(), composite));
    }
    Ok(rankings)
}
