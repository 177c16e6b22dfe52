//! Domain-level errors

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::ConditionCode;

/// Errors that can occur in the scoring-and-ranking pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Raw measurement outside the valid domain (e.g. negative wind speed)
    #[error("invalid {quantity}: {value}")]
    InvalidMeasurement { quantity: &'static str, value: f64 },

    /// Precipitation condition code absent from the configured score table
    #[error("unknown condition code: {0}")]
    UnknownConditionCode(ConditionCode),

    /// Aggregation attempted on a segment with no assigned hours
    #[error("segment '{name}' has no hours assigned")]
    EmptySegment { name: String },

    /// No forecast records matched the target date
    #[error("no forecast records found for {date}")]
    IncompleteForecast { date: NaiveDate },

    /// Ranking attempted before the segment was scored
    #[error("segment '{name}' has not been scored")]
    UnscoredSegment { name: String },
}

impl DomainError {
    /// Create an invalid measurement error
    pub fn invalid_measurement(quantity: &'static str, value: f64) -> Self {
        Self::InvalidMeasurement { quantity, value }
    }

    /// Create an empty segment error
    pub fn empty_segment(name: impl Into<String>) -> Self {
        Self::EmptySegment { name: name.into() }
    }

    /// Create an unscored segment error
    pub fn unscored_segment(name: impl Into<String>) -> Self {
        Self::UnscoredSegment { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_measurement_message() {
        let err = DomainError::invalid_measurement("wind speed", -3.2);
        assert_eq!(err.to_string(), "invalid wind speed: -3.2");
    }

    #[test]
    fn unknown_condition_code_message() {
        let err = DomainError::UnknownConditionCode(ConditionCode::new(999));
        assert_eq!(err.to_string(), "unknown condition code: 999");
    }

    #[test]
    fn empty_segment_message() {
        let err = DomainError::empty_segment("morning");
        assert_eq!(err.to_string(), "segment 'morning' has no hours assigned");
    }

    #[test]
    fn incomplete_forecast_message() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date");
        let err = DomainError::IncompleteForecast { date };
        assert_eq!(err.to_string(), "no forecast records found for 2026-08-06");
    }

    #[test]
    fn unscored_segment_message() {
        let err = DomainError::unscored_segment("evening");
        assert_eq!(err.to_string(), "segment 'evening' has not been scored");
    }
}
