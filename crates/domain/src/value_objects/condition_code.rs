//! Precipitation condition code value object
//!
//! OpenWeather numeric condition ids (<https://openweathermap.org/weather-conditions>).
//! The code itself is opaque to the scoring pipeline; scores come from the
//! configured precipitation table. The family/description helpers exist for
//! downstream message composition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric weather condition identifier (e.g. 800 clear sky, 500 light rain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCode(u16);

impl ConditionCode {
    /// Create a condition code from its numeric id
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the numeric id
    #[must_use]
    pub const fn id(self) -> u16 {
        self.0
    }

    /// Classify the code into its condition family by id range
    #[must_use]
    pub const fn family(self) -> ConditionFamily {
        match self.0 {
            200..=232 => ConditionFamily::Thunderstorm,
            300..=321 => ConditionFamily::Drizzle,
            500..=531 => ConditionFamily::Rain,
            600..=622 => ConditionFamily::Snow,
            701..=781 => ConditionFamily::Atmosphere,
            800 => ConditionFamily::Clear,
            801..=804 => ConditionFamily::Clouds,
            _ => ConditionFamily::Unknown,
        }
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ConditionCode {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<ConditionCode> for u16 {
    fn from(code: ConditionCode) -> Self {
        code.0
    }
}

/// Weather condition family derived from the condition id range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionFamily {
    /// Thunderstorm (2xx)
    Thunderstorm,
    /// Drizzle (3xx)
    Drizzle,
    /// Rain (5xx)
    Rain,
    /// Snow (6xx)
    Snow,
    /// Mist, fog, dust and similar obscurations (7xx)
    Atmosphere,
    /// Clear sky (800)
    Clear,
    /// Clouds (801-804)
    Clouds,
    /// Id outside the published catalogue
    Unknown,
}

impl ConditionFamily {
    /// Get a human-readable description of the condition family
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Atmosphere => "Mist or fog",
            Self::Clear => "Clear sky",
            Self::Clouds => "Clouds",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation of the condition family
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::Drizzle | Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Atmosphere => "🌫️",
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Unknown => "❓",
        }
    }
}

impl fmt::Display for ConditionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_thunderstorm_range() {
        assert_eq!(
            ConditionCode::new(200).family(),
            ConditionFamily::Thunderstorm
        );
        assert_eq!(
            ConditionCode::new(232).family(),
            ConditionFamily::Thunderstorm
        );
    }

    #[test]
    fn family_rain_and_drizzle() {
        assert_eq!(ConditionCode::new(300).family(), ConditionFamily::Drizzle);
        assert_eq!(ConditionCode::new(500).family(), ConditionFamily::Rain);
        assert_eq!(ConditionCode::new(531).family(), ConditionFamily::Rain);
    }

    #[test]
    fn family_snow_and_atmosphere() {
        assert_eq!(ConditionCode::new(600).family(), ConditionFamily::Snow);
        assert_eq!(
            ConditionCode::new(741).family(),
            ConditionFamily::Atmosphere
        );
    }

    #[test]
    fn family_clear_and_clouds() {
        assert_eq!(ConditionCode::new(800).family(), ConditionFamily::Clear);
        assert_eq!(ConditionCode::new(801).family(), ConditionFamily::Clouds);
        assert_eq!(ConditionCode::new(804).family(), ConditionFamily::Clouds);
    }

    #[test]
    fn family_unknown_outside_catalogue() {
        assert_eq!(ConditionCode::new(0).family(), ConditionFamily::Unknown);
        assert_eq!(ConditionCode::new(900).family(), ConditionFamily::Unknown);
    }

    #[test]
    fn family_description_and_emoji() {
        assert_eq!(ConditionFamily::Clear.description(), "Clear sky");
        assert_eq!(ConditionFamily::Clear.emoji(), "☀️");
        assert_eq!(ConditionFamily::Rain.emoji(), "🌧️");
        assert_eq!(ConditionFamily::Thunderstorm.emoji(), "⛈️");
    }

    #[test]
    fn display_shows_numeric_id() {
        assert_eq!(format!("{}", ConditionCode::new(500)), "500");
    }

    #[test]
    fn serialization_is_transparent() {
        let code = ConditionCode::new(800);
        let json = serde_json::to_string(&code).expect("serialize");
        assert_eq!(json, "800");

        let parsed: ConditionCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, code);
    }
}
