//! Forecast provider port
//!
//! Defines the interface for fetching hourly and daily forecast records.
//! The records come back already filtered for the location; matching them
//! to a calendar date is the domain's job. Retry policy belongs to the
//! adapter's caller, not to this boundary.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use domain::{DailyObservation, HourlyObservation};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Errors surfaced by forecast providers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// Connection to the provider failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the provider response
    #[error("parse error: {0}")]
    ParseError(String),

    /// The provider rejected the supplied credentials
    #[error("provider rejected credentials")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// Provider is temporarily unavailable
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the hourly and daily forecast records for a location
    ///
    /// Returns both record streams in provider order; the caller selects
    /// the records matching its target date.
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<(Vec<HourlyObservation>, Vec<DailyObservation>), ForecastError>;

    /// Check if the forecast provider is reachable
    async fn is_available(&self) -> bool;
}
