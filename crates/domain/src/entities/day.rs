//! Calendar day entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

use crate::entities::{Hour, Segment, mean, round2};
use crate::errors::DomainError;
use crate::observations::{DailyObservation, HourlyObservation};
use crate::ranking::{RankingPolicy, Rankings, rank_segments};
use crate::scoring::{PrecipitationTable, temperature_score, wind_score};
use crate::value_objects::{GeoLocation, HourOfDay, ScoreCard, SegmentPlan, WeatherSample};

/// One forecast day: hours, configured segments, and tier rankings
///
/// The pipeline over a day is a strict sequence: build from forecast
/// records, score, rank. Each stage is idempotent over unchanged input,
/// and a new forecast requires a new `Day`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    date: NaiveDate,
    location: GeoLocation,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    sample: WeatherSample,
    hours: Vec<Hour>,
    segments: Vec<Segment>,
    rankings: Option<Rankings>,
}

impl Day {
    /// Build a day from the forecast collaborator's records
    ///
    /// Selects the hourly records whose UTC date matches the target date,
    /// partitions them into the plan's segments, and aggregates each
    /// segment's raw measurements. The day's own temperature is the mean
    /// of its hours' feels-like values; sunrise, sunset, and the daily
    /// wind/precipitation figures pass through from the matching daily
    /// record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteForecast` if no hourly or no daily record
    /// matches the target date, and `EmptySegment` if a configured window
    /// has no coverage.
    pub fn from_forecast(
        date: NaiveDate,
        location: GeoLocation,
        plan: &SegmentPlan,
        hourly: &[HourlyObservation],
        daily: &[DailyObservation],
    ) -> Result<Self, DomainError> {
        let mut hours: Vec<Hour> = hourly
            .iter()
            .filter(|record| record.date() == date)
            .map(|record| {
                Hour::new(
                    HourOfDay::from_datetime(&record.timestamp),
                    WeatherSample::new(
                        record.feels_like_c,
                        record.wind_speed_mps,
                        record.condition,
                    ),
                )
            })
            .collect();
        if hours.is_empty() {
            return Err(DomainError::IncompleteForecast { date });
        }
        hours.sort_by_key(Hour::hour);

        let daily_record = daily
            .iter()
            .find(|record| record.date() == date)
            .ok_or(DomainError::IncompleteForecast { date })?;

        let temps: Vec<f64> = hours.iter().map(|h| h.sample().temperature_c).collect();
        let sample = WeatherSample::new(
            round2(mean(&temps)),
            daily_record.wind_speed_mps,
            daily_record.condition,
        );

        let mut segments: Vec<Segment> = plan
            .windows()
            .iter()
            .cloned()
            .map(Segment::new)
            .collect();
        for (index, hour) in hours.iter().enumerate() {
            for segment in &mut segments {
                if segment.contains(hour.hour()) {
                    segment.assign(index);
                }
            }
        }
        for segment in &mut segments {
            segment.aggregate_sample(&hours)?;
        }

        Ok(Self {
            date,
            location,
            sunrise: daily_record.sunrise,
            sunset: daily_record.sunset,
            sample,
            hours,
            segments,
            rankings: None,
        })
    }

    /// Score every hour and aggregate every segment's scores
    ///
    /// Scores are computed for all hours before any are recorded, so a bad
    /// raw value aborts the pass without leaving partial score state.
    /// Re-running recomputes identical scores from the immutable raw
    /// fields.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidMeasurement` and `UnknownConditionCode` from the
    /// scoring functions.
    pub fn score(&mut self, table: &PrecipitationTable) -> Result<(), DomainError> {
        let mut cards = Vec::with_capacity(self.hours.len());
        for hour in &self.hours {
            let sample = hour.sample();
            cards.push(ScoreCard::new(
                temperature_score(sample.temperature_c),
                wind_score(sample.wind_speed_mps)?,
                table.score(sample.condition)?,
            ));
        }
        for (hour, card) in self.hours.iter_mut().zip(cards) {
            hour.set_scores(card);
        }
        for segment in &mut self.segments {
            segment.aggregate_scores(&self.hours)?;
        }
        Ok(())
    }

    /// Bucket the scored segments into alert tiers
    ///
    /// Must run after `score`; re-running over unchanged scores yields an
    /// identical mapping.
    ///
    /// # Errors
    ///
    /// Returns `UnscoredSegment` if any segment has not been scored yet.
    pub fn rank(&mut self, policy: &RankingPolicy) -> Result<&Rankings, DomainError> {
        let rankings = rank_segments(&self.segments, policy)?;
        Ok(&*self.rankings.insert(rankings))
    }

    /// The calendar date this forecast applies to
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The forecast location
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Sunrise time (UTC), from the daily forecast record
    #[must_use]
    pub const fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    /// Sunset time (UTC), from the daily forecast record
    #[must_use]
    pub const fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    /// Daily aggregates: mean temperature plus the daily record's wind and
    /// precipitation
    #[must_use]
    pub const fn sample(&self) -> &WeatherSample {
        &self.sample
    }

    /// All hours for the date, ordered by hour of day
    #[must_use]
    pub fn hours(&self) -> &[Hour] {
        &self.hours
    }

    /// The configured segments, in plan order
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Tier rankings, present once `rank` has run
    #[must_use]
    pub const fn rankings(&self) -> Option<&Rankings> {
        self.rankings.as_ref()
    }

    /// The hours assigned to a segment, in hour order
    #[must_use]
    pub fn segment_hours(&self, segment: &Segment) -> Vec<&Hour> {
        segment
            .hour_indices()
            .iter()
            .filter_map(|&index| self.hours.get(index))
            .collect()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.segments.iter().map(Segment::name).collect();
        write!(
            f,
            "Day {} with {} segments: {}",
            self.date.format("%d/%m/%y"),
            self.segments.len(),
            names.join(", ")
        )
    }
}
