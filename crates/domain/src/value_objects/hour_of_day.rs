//! Hour-of-day value object

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when an hour value is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid hour of day: {0} is out of range (must be 0-23)")]
pub struct InvalidHourOfDay(u8);

/// Hour of the day (0-23)
///
/// Identifies an hourly observation within its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Maximum valid hour
    pub const MAX: u8 = 23;

    /// Create a new validated hour of day
    ///
    /// # Errors
    ///
    /// Returns `InvalidHourOfDay` if the value is greater than 23.
    pub const fn new(value: u8) -> Result<Self, InvalidHourOfDay> {
        if value > Self::MAX {
            Err(InvalidHourOfDay(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create an hour of day, clamping to the valid range
    ///
    /// Values greater than 23 are clamped to 23.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Extract the hour of day from a UTC timestamp
    #[must_use]
    pub fn from_datetime(timestamp: &DateTime<Utc>) -> Self {
        // Timelike::hour is always 0-23
        #[allow(clippy::cast_possible_truncation)]
        let hour = timestamp.hour() as u8;
        Self(hour)
    }

    /// Get the hour value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = InvalidHourOfDay;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> Self {
        hour.0
    }
}

/// Custom deserialization that validates the hour range
impl<'de> Deserialize<'de> for HourOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
