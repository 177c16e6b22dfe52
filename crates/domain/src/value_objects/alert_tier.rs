//! Alert tier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert tier for a scored day segment
///
/// Three ordered buckets ranking how favorable a segment is for the
/// outdoor activity, most favorable first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    /// Favorable conditions
    Green,
    /// Usable with caution
    Amber,
    /// Unfavorable conditions
    Red,
}

impl AlertTier {
    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Green => "🟢",
            Self::Amber => "🟠",
            Self::Red => "🔴",
        }
    }

    /// All tiers in ranking order (most favorable first)
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Green, Self::Amber, Self::Red]
    }

    /// Check whether this tier is more favorable than another
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
