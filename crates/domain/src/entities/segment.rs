//! Day segment entity

use serde::Serialize;
use std::fmt;

use crate::entities::{Hour, mean, round2};
use crate::errors::DomainError;
use crate::value_objects::{HourOfDay, Score, ScoreCard, SegmentWindow, WeatherSample};

/// A named time-of-day window over a day's hours
///
/// Holds a non-owning view (indices) into the owning day's hour list, plus
/// the aggregates computed from the assigned hours. Aggregates stay unset
/// until the assembly and scoring passes run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    window: SegmentWindow,
    hours: Vec<usize>,
    sample: Option<WeatherSample>,
    scores: Option<ScoreCard>,
}

impl Segment {
    /// Create an empty segment for a configured window
    pub(crate) const fn new(window: SegmentWindow) -> Self {
        Self {
            window,
            hours: Vec::new(),
            sample: None,
            scores: None,
        }
    }

    /// Segment name from the plan
    #[must_use]
    pub fn name(&self) -> &str {
        &self.window.name
    }

    /// The configured window
    #[must_use]
    pub const fn window(&self) -> &SegmentWindow {
        &self.window
    }

    /// Window length in hours
    #[must_use]
    pub const fn duration(&self) -> u8 {
        self.window.duration()
    }

    /// Check whether an hour of day falls inside this segment's window
    #[must_use]
    pub fn contains(&self, hour: HourOfDay) -> bool {
        self.window.contains(hour)
    }

    /// Indices into the owning day's hour list, in hour order
    #[must_use]
    pub fn hour_indices(&self) -> &[usize] {
        &self.hours
    }

    /// Number of hours assigned to this segment
    #[must_use]
    pub fn hour_count(&self) -> usize {
        self.hours.len()
    }

    /// Aggregated raw measurements, present once assembly has run
    #[must_use]
    pub const fn sample(&self) -> Option<&WeatherSample> {
        self.sample.as_ref()
    }

    /// Aggregated comfort scores, present once the scoring pass has run
    #[must_use]
    pub const fn scores(&self) -> Option<&ScoreCard> {
        self.scores.as_ref()
    }

    /// Assign an hour (by index into the day's hour list) to this segment
    pub(crate) fn assign(&mut self, index: usize) {
        self.hours.push(index);
    }

    /// Aggregate raw measurements over the assigned hours
    ///
    /// Temperature and wind use the arithmetic mean rounded to two
    /// decimals. The precipitation code is not averaged: the middle
    /// element (index `n / 2` in hour order) represents the segment.
    pub(crate) fn aggregate_sample(&mut self, hours: &[Hour]) -> Result<(), DomainError> {
        let samples: Vec<&WeatherSample> = self
            .hours
            .iter()
            .filter_map(|&index| hours.get(index))
            .map(Hour::sample)
            .collect();
        if samples.is_empty() {
            return Err(DomainError::empty_segment(self.name()));
        }

        let temps: Vec<f64> = samples.iter().map(|s| s.temperature_c).collect();
        let winds: Vec<f64> = samples.iter().map(|s| s.wind_speed_mps).collect();
        let middle = samples[samples.len() / 2];

        self.sample = Some(WeatherSample::new(
            round2(mean(&temps)),
            round2(mean(&winds)),
            middle.condition,
        ));
        Ok(())
    }

    /// Aggregate comfort scores over the assigned hours
    ///
    /// Same policy as the raw aggregation: mean for temperature and wind,
    /// middle element for the precipitation score.
    pub(crate) fn aggregate_scores(&mut self, hours: &[Hour]) -> Result<(), DomainError> {
        let cards: Option<Vec<ScoreCard>> = self
            .hours
            .iter()
            .filter_map(|&index| hours.get(index))
            .map(|hour| hour.scores().copied())
            .collect();
        let cards = cards.ok_or_else(|| DomainError::unscored_segment(self.name()))?;
        if cards.is_empty() {
            return Err(DomainError::empty_segment(self.name()));
        }

        let temps: Vec<f64> = cards.iter().map(|c| c.temperature.value()).collect();
        let winds: Vec<f64> = cards.iter().map(|c| c.wind.value()).collect();
        let middle = cards[cards.len() / 2];

        self.scores = Some(ScoreCard::new(
            Score::clamped(mean(&temps)).rounded(),
            Score::clamped(mean(&winds)).rounded(),
            middle.precipitation,
        ));
        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {}", self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ConditionCode;

    fn hour_at(hour: u8, temp: f64, wind: f64, code: u16) -> Hour {
        Hour::new(
            HourOfDay::clamped(hour),
            WeatherSample::new(temp, wind, ConditionCode::new(code)),
        )
    }

    fn segment_over(hours: &[Hour]) -> Segment {
        let mut segment = Segment::new(SegmentWindow::new(
            "morning",
            HourOfDay::clamped(0),
            HourOfDay::clamped(23),
        ));
        for index in 0..hours.len() {
            segment.assign(index);
        }
        segment
    }

    #[test]
    fn aggregate_sample_averages_temperature_and_wind() {
        let hours = vec![
            hour_at(9, 10.0, 2.0, 800),
            hour_at(10, 12.0, 4.0, 800),
            hour_at(11, 14.0, 6.0, 800),
        ];
        let mut segment = segment_over(&hours);
        segment.aggregate_sample(&hours).expect("aggregation");

        let sample = segment.sample().expect("aggregated sample");
        assert!((sample.temperature_c - 12.0).abs() < f64::EPSILON);
        assert!((sample.wind_speed_mps - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_sample_rounds_to_two_decimals() {
        let hours = vec![hour_at(9, 10.0, 1.0, 800), hour_at(10, 10.1, 1.0, 800)];
        let mut segment = segment_over(&hours);
        segment.aggregate_sample(&hours).expect("aggregation");

        let sample = segment.sample().expect("aggregated sample");
        assert!((sample.temperature_c - 10.05).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_sample_takes_middle_precipitation_code() {
        // Four codes resolve to index 2, the deterministic middle.
        let hours = vec![
            hour_at(9, 10.0, 1.0, 200),
            hour_at(10, 10.0, 1.0, 300),
            hour_at(11, 10.0, 1.0, 500),
            hour_at(12, 10.0, 1.0, 800),
        ];
        let mut segment = segment_over(&hours);
        segment.aggregate_sample(&hours).expect("aggregation");

        let sample = segment.sample().expect("aggregated sample");
        assert_eq!(sample.condition, ConditionCode::new(500));
    }

    #[test]
    fn aggregate_sample_single_hour_is_its_own_middle() {
        let hours = vec![hour_at(9, 10.0, 1.0, 741)];
        let mut segment = segment_over(&hours);
        segment.aggregate_sample(&hours).expect("aggregation");

        assert_eq!(
            segment.sample().expect("sample").condition,
            ConditionCode::new(741)
        );
    }

    #[test]
    fn aggregate_sample_empty_segment_fails() {
        let hours: Vec<Hour> = Vec::new();
        let mut segment = Segment::new(SegmentWindow::new(
            "night",
            HourOfDay::clamped(0),
            HourOfDay::clamped(5),
        ));

        let result = segment.aggregate_sample(&hours);
        assert_eq!(result, Err(DomainError::empty_segment("night")));
        assert!(segment.sample().is_none());
    }

    #[test]
    fn aggregate_scores_requires_scored_hours() {
        let hours = vec![hour_at(9, 10.0, 1.0, 800)];
        let mut segment = segment_over(&hours);

        let result = segment.aggregate_scores(&hours);
        assert_eq!(result, Err(DomainError::unscored_segment("morning")));
    }

    #[test]
    fn aggregate_scores_averages_and_takes_middle() {
        let mut hours = vec![
            hour_at(9, 10.0, 1.0, 800),
            hour_at(10, 10.0, 1.0, 800),
            hour_at(11, 10.0, 1.0, 800),
        ];
        for (i, hour) in hours.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let base = i as f64;
            hour.set_scores(ScoreCard::new(
                Score::clamped(4.0 + base),
                Score::clamped(6.0),
                Score::clamped(2.0 * base),
            ));
        }
        let mut segment = segment_over(&hours);
        segment.aggregate_scores(&hours).expect("aggregation");

        let scores = segment.scores().expect("aggregated scores");
        assert!((scores.temperature.value() - 5.0).abs() < f64::EPSILON);
        assert!((scores.wind.value() - 6.0).abs() < f64::EPSILON);
        // Middle of [0.0, 2.0, 4.0] is 2.0
        assert!((scores.precipitation.value() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_includes_window() {
        let segment = Segment::new(SegmentWindow::new(
            "afternoon",
            HourOfDay::clamped(12),
            HourOfDay::clamped(17),
        ));
        assert_eq!(segment.to_string(), "Segment afternoon (12:00 to 17:00)");
    }
}
