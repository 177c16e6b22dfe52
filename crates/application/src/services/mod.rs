//! Application services - Use case implementations

mod outlook_service;

pub use outlook_service::{DayOutlook, OutlookService};
