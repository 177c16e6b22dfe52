//! Value Objects - Immutable, identity-less domain primitives

mod alert_tier;
mod condition_code;
mod geo_location;
mod hour_of_day;
mod sample;
mod score;
mod score_card;
mod segment_plan;

pub use alert_tier::AlertTier;
pub use condition_code::{ConditionCode, ConditionFamily};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use hour_of_day::{HourOfDay, InvalidHourOfDay};
pub use sample::WeatherSample;
pub use score::{InvalidScore, Score};
pub use score_card::ScoreCard;
pub use segment_plan::{InvalidSegmentPlan, SegmentPlan, SegmentWindow};
