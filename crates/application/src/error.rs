//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::ForecastError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error from the scoring-and-ranking core
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Forecast provider error
    #[error("forecast provider error: {0}")]
    Forecast(#[from] ForecastError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::empty_segment("morning"));
        assert_eq!(err.to_string(), "segment 'morning' has no hours assigned");
    }

    #[test]
    fn forecast_error_is_prefixed() {
        let err = ApplicationError::from(ForecastError::RateLimited);
        assert_eq!(
            err.to_string(),
            "forecast provider error: rate limit exceeded"
        );
    }

    #[test]
    fn configuration_error_message() {
        let err = ApplicationError::Configuration("bad plan".to_string());
        assert_eq!(err.to_string(), "configuration error: bad plan");
    }
}
