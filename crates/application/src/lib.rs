//! Application layer - Use cases and orchestration
//!
//! Runs the ingest, score, aggregate, rank, interpret pipeline over one
//! day's forecast behind the `ForecastPort` boundary. Adapters implement
//! the port; consumers read the `DayOutlook` it produces.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
