//! Raw weather measurement triple
//!
//! The shared measurement shape embedded by hours, segments, and the day:
//! temperature, wind speed, and precipitation condition. Segments and the
//! day carry the aggregated form of the same triple.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::ConditionCode;

/// Raw weather measurements for one time period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Feels-like temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in metres per second
    pub wind_speed_mps: f64,
    /// Precipitation condition code
    pub condition: ConditionCode,
}

impl WeatherSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(temperature_c: f64, wind_speed_mps: f64, condition: ConditionCode) -> Self {
        Self {
            temperature_c,
            wind_speed_mps,
            condition,
        }
    }
}

impl fmt::Display for WeatherSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}°C, {:.1} m/s, {}",
            self.temperature_c,
            self.wind_speed_mps,
            self.condition.family()
        )
    }
}
