//! OpenWeather forecast integration
//!
//! Adapter for the OpenWeather One Call API
//! (<https://openweathermap.org/api/one-call-3>) implementing the
//! application layer's `ForecastPort`. Maps the provider's hourly and
//! daily records to the domain's observation types; no retry policy or
//! caching lives here.

pub mod client;
mod models;

pub use client::{ForecastConfig, OpenWeatherClient};
