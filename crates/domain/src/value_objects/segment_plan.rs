//! Segment window configuration
//!
//! Names the time-of-day windows a day is partitioned into. The plan is
//! supplied before any forecast data is ingested; windows are inclusive on
//! both ends and may overlap, in which case an hour belongs to every window
//! that contains it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::value_objects::HourOfDay;

/// Error returned when a segment plan is malformed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid segment plan: duplicate segment name '{name}'")]
pub struct InvalidSegmentPlan {
    /// The name that appeared more than once
    pub name: String,
}

/// A named, inclusive time-of-day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentWindow {
    /// Segment name, unique within a plan (e.g. "morning")
    pub name: String,
    /// First hour of the window (inclusive)
    pub start: HourOfDay,
    /// Last hour of the window (inclusive)
    pub end: HourOfDay,
}

impl SegmentWindow {
    /// Create a new window
    #[must_use]
    pub fn new(name: impl Into<String>, start: HourOfDay, end: HourOfDay) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Window length in hours, ignoring direction
    #[must_use]
    pub const fn duration(&self) -> u8 {
        self.end.value().abs_diff(self.start.value())
    }

    /// Check whether an hour falls inside the window (inclusive both ends)
    #[must_use]
    pub fn contains(&self, hour: HourOfDay) -> bool {
        self.start <= hour && hour <= self.end
    }
}

impl fmt::Display for SegmentWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} to {})", self.name, self.start, self.end)
    }
}

/// Ordered list of segment windows for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SegmentPlan {
    windows: Vec<SegmentWindow>,
}

impl SegmentPlan {
    /// Create a plan from an ordered list of windows
    ///
    /// # Errors
    ///
    /// Returns `InvalidSegmentPlan` if two windows share a name.
    pub fn new(windows: Vec<SegmentWindow>) -> Result<Self, InvalidSegmentPlan> {
        let mut seen = HashSet::new();
        for window in &windows {
            if !seen.insert(window.name.as_str()) {
                return Err(InvalidSegmentPlan {
                    name: window.name.clone(),
                });
            }
        }
        Ok(Self { windows })
    }

    /// Get the configured windows in order
    #[must_use]
    pub fn windows(&self) -> &[SegmentWindow] {
        &self.windows
    }

    /// Number of configured windows
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Check whether the plan has no windows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl Default for SegmentPlan {
    /// Morning, afternoon and evening daylight windows
    fn default() -> Self {
        let window = |name: &str, start: u8, end: u8| {
            SegmentWindow::new(name, HourOfDay::clamped(start), HourOfDay::clamped(end))
        };
        Self {
            windows: vec![
                window("morning", 6, 11),
                window("afternoon", 12, 17),
                window("evening", 18, 21),
            ],
        }
    }
}

/// Custom deserialization that validates name uniqueness
impl<'de> Deserialize<'de> for SegmentPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let windows = Vec::<SegmentWindow>::deserialize(deserializer)?;
        Self::new(windows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(value: u8) -> HourOfDay {
        HourOfDay::new(value).expect("valid hour")
    }

    #[test]
    fn window_contains_is_inclusive_both_ends() {
        let window = SegmentWindow::new("morning", hour(9), hour(12));
        assert!(window.contains(hour(9)));
        assert!(window.contains(hour(10)));
        assert!(window.contains(hour(12)));
        assert!(!window.contains(hour(8)));
        assert!(!window.contains(hour(13)));
    }

    #[test]
    fn window_duration_ignores_direction() {
        assert_eq!(SegmentWindow::new("a", hour(6), hour(11)).duration(), 5);
        assert_eq!(SegmentWindow::new("b", hour(11), hour(6)).duration(), 5);
    }

    #[test]
    fn window_display() {
        let window = SegmentWindow::new("evening", hour(18), hour(21));
        assert_eq!(window.to_string(), "evening (18:00 to 21:00)");
    }

    #[test]
    fn plan_preserves_order() {
        let plan = SegmentPlan::new(vec![
            SegmentWindow::new("evening", hour(18), hour(21)),
            SegmentWindow::new("morning", hour(6), hour(11)),
        ])
        .expect("valid plan");

        let names: Vec<_> = plan.windows().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["evening", "morning"]);
    }

    #[test]
    fn plan_rejects_duplicate_names() {
        let result = SegmentPlan::new(vec![
            SegmentWindow::new("morning", hour(6), hour(11)),
            SegmentWindow::new("morning", hour(12), hour(17)),
        ]);

        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid segment plan: duplicate segment name 'morning'"
        );
    }

    #[test]
    fn plan_allows_overlapping_windows() {
        let plan = SegmentPlan::new(vec![
            SegmentWindow::new("morning", hour(6), hour(12)),
            SegmentWindow::new("midday", hour(10), hour(14)),
        ]);
        assert!(plan.is_ok());
    }

    #[test]
    fn empty_plan_is_valid() {
        let plan = SegmentPlan::new(vec![]).expect("empty plan");
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn default_plan_covers_daylight() {
        let plan = SegmentPlan::default();
        let names: Vec<_> = plan.windows().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["morning", "afternoon", "evening"]);
        assert_eq!(plan.windows()[0].start, hour(6));
        assert_eq!(plan.windows()[2].end, hour(21));
    }

    #[test]
    fn deserialization_validates_names() {
        let json = r#"[
            {"name": "morning", "start": 6, "end": 11},
            {"name": "morning", "start": 12, "end": 17}
        ]"#;
        let result: Result<SegmentPlan, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_roundtrip() {
        let plan = SegmentPlan::default();
        let json = serde_json::to_string(&plan).expect("serialize");
        let parsed: SegmentPlan = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, plan);
    }
}
