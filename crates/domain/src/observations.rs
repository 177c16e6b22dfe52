//! Forecast ingestion records
//!
//! The boundary contract consumed from the forecast collaborator: ordered
//! hourly and daily records, already filtered for the location. Records are
//! matched to a day by their UTC calendar date; the core performs no
//! network calls or geocoding of its own.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ConditionCode;

/// One hourly forecast record from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Observation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Feels-like temperature in Celsius
    pub feels_like_c: f64,
    /// Wind speed in metres per second
    pub wind_speed_mps: f64,
    /// Precipitation condition code
    pub condition: ConditionCode,
}

impl HourlyObservation {
    /// The UTC calendar date this record belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// One daily forecast record from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Forecast time (UTC), identifying the calendar date
    pub timestamp: DateTime<Utc>,
    /// Sunrise time (UTC)
    pub sunrise: DateTime<Utc>,
    /// Sunset time (UTC)
    pub sunset: DateTime<Utc>,
    /// Daily wind speed in metres per second
    pub wind_speed_mps: f64,
    /// Daily precipitation condition code
    pub condition: ConditionCode,
}

impl DailyObservation {
    /// The UTC calendar date this record belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamp(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn hourly_observation_date() {
        let obs = HourlyObservation {
            timestamp: timestamp("2026-08-06T14:00:00Z"),
            feels_like_c: 18.0,
            wind_speed_mps: 2.5,
            condition: ConditionCode::new(800),
        };
        assert_eq!(obs.date().to_string(), "2026-08-06");
    }

    #[test]
    fn daily_observation_date() {
        let obs = DailyObservation {
            timestamp: timestamp("2026-08-06T12:00:00Z"),
            sunrise: timestamp("2026-08-06T04:42:00Z"),
            sunset: timestamp("2026-08-06T19:51:00Z"),
            wind_speed_mps: 4.0,
            condition: ConditionCode::new(801),
        };
        assert_eq!(obs.date().to_string(), "2026-08-06");
    }

    #[test]
    fn hourly_serialization_roundtrip() {
        let obs = HourlyObservation {
            timestamp: timestamp("2026-08-06T09:00:00Z"),
            feels_like_c: 16.5,
            wind_speed_mps: 1.0,
            condition: ConditionCode::new(500),
        };
        let json = serde_json::to_string(&obs).expect("serialize");
        let parsed: HourlyObservation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, obs);
    }
}
