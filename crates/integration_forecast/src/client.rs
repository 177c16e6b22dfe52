//! OpenWeather One Call client
//!
//! HTTP adapter implementing the application layer's `ForecastPort`.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use application::ports::{ForecastError, ForecastPort};
use domain::value_objects::{ConditionCode, GeoLocation};
use domain::{DailyObservation, HourlyObservation};

use crate::models::{ConditionTag, DailyData, HourlyData, OneCallResponse};

/// OpenWeather client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/3.0>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeather API key
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/3.0".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl ForecastConfig {
    /// Create a configuration with default URL and timeout
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// The API key never appears in logs
impl fmt::Debug for ForecastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// OpenWeather One Call HTTP client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: ForecastConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the One Call URL for a location
    ///
    /// Metric units keep temperatures in Celsius and wind in m/s, matching
    /// the domain's observation records.
    fn build_onecall_url(&self, location: &GeoLocation) -> String {
        format!(
            "{}/onecall?lat={}&lon={}&units=metric&exclude=current,minutely,alerts&appid={}",
            self.config.base_url,
            location.latitude(),
            location.longitude(),
            self.config.api_key
        )
    }

    /// Convert unix seconds to `DateTime<Utc>`
    fn parse_timestamp(seconds: i64) -> Result<DateTime<Utc>, ForecastError> {
        DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| ForecastError::ParseError(format!("invalid unix timestamp: {seconds}")))
    }

    /// Primary condition code of a record's weather tags
    fn primary_condition(weather: &[ConditionTag]) -> Result<ConditionCode, ForecastError> {
        weather
            .first()
            .map(|tag| ConditionCode::new(tag.id))
            .ok_or_else(|| ForecastError::ParseError("record has no weather tags".to_string()))
    }

    /// Map a raw hourly record to a domain observation
    fn map_hourly(record: &HourlyData) -> Result<HourlyObservation, ForecastError> {
        Ok(HourlyObservation {
            timestamp: Self::parse_timestamp(record.dt)?,
            feels_like_c: record.feels_like,
            wind_speed_mps: record.wind_speed,
            condition: Self::primary_condition(&record.weather)?,
        })
    }

    /// Map a raw daily record to a domain observation
    fn map_daily(record: &DailyData) -> Result<DailyObservation, ForecastError> {
        Ok(DailyObservation {
            timestamp: Self::parse_timestamp(record.dt)?,
            sunrise: Self::parse_timestamp(record.sunrise)?,
            sunset: Self::parse_timestamp(record.sunset)?,
            wind_speed_mps: record.wind_speed,
            condition: Self::primary_condition(&record.weather)?,
        })
    }
}

#[async_trait]
impl ForecastPort for OpenWeatherClient {
    #[instrument(
        skip(self),
        fields(lat = %location.latitude(), lon = %location.longitude())
    )]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<(Vec<HourlyObservation>, Vec<DailyObservation>), ForecastError> {
        // The URL carries the API key, so it stays out of the logs.
        let url = self.build_onecall_url(location);
        debug!("Fetching One Call forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ForecastError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ForecastError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ForecastError::RateLimited);
        }
        if status.is_server_error() {
            return Err(ForecastError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ForecastError::RequestFailed(format!("HTTP {status}")));
        }

        let body: OneCallResponse = response
            .json()
            .await
            .map_err(|e| ForecastError::ParseError(e.to_string()))?;

        let hourly_data = body
            .hourly
            .ok_or_else(|| ForecastError::ParseError("no hourly data in response".to_string()))?;
        let daily_data = body
            .daily
            .ok_or_else(|| ForecastError::ParseError("no daily data in response".to_string()))?;

        let hourly: Vec<HourlyObservation> = hourly_data
            .iter()
            .map(Self::map_hourly)
            .collect::<Result<_, _>>()?;
        let daily: Vec<DailyObservation> = daily_data
            .iter()
            .map(Self::map_daily)
            .collect::<Result<_, _>>()?;

        debug!(
            hourly = hourly.len(),
            daily = daily.len(),
            "Mapped forecast records"
        );
        Ok((hourly, daily))
    }

    async fn is_available(&self) -> bool {
        self.fetch_forecast(&GeoLocation::london()).await.is_ok()
    }
}
