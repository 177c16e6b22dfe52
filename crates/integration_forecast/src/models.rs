//! Raw OpenWeather One Call response models
//!
//! Shapes mirror the provider JSON; the client maps them to the domain's
//! observation records.

use serde::Deserialize;

/// One weather condition tag on a record
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConditionTag {
    /// Numeric condition id (e.g. 800 clear sky)
    pub id: u16,
}

/// Raw hourly record
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    /// Unix timestamp (UTC seconds)
    pub dt: i64,
    /// Feels-like temperature; Celsius with `units=metric`
    pub feels_like: f64,
    /// Wind speed; m/s with `units=metric`
    pub wind_speed: f64,
    /// Condition tags, primary first
    pub weather: Vec<ConditionTag>,
}

/// Raw daily record
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    /// Unix timestamp (UTC seconds)
    pub dt: i64,
    /// Sunrise unix timestamp
    pub sunrise: i64,
    /// Sunset unix timestamp
    pub sunset: i64,
    /// Daily wind speed; m/s with `units=metric`
    pub wind_speed: f64,
    /// Condition tags, primary first
    pub weather: Vec<ConditionTag>,
}

/// Raw One Call response
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    #[serde(default)]
    pub hourly: Option<Vec<HourlyData>>,
    #[serde(default)]
    pub daily: Option<Vec<DailyData>>,
}
