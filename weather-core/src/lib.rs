//! Core library for the weather web app.
//!
//! This crate defines:
//! - Configuration handling
//! - The OpenWeather client and the raw response schema
//! - View bundles and the builders that produce them (single city, comparison)
//!
//! It is used by `weather-web`, but has no dependency on any HTTP server.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod units;
pub mod view;

pub use config::Config;
pub use error::WeatherError;
pub use model::{
    CityWeatherView, ComparedCity, ComparisonDeltas, ComparisonQuery, ComparisonView, ErrorView,
    HomeView, ViewOutcome, WeatherQuery,
};
pub use provider::{OpenWeatherClient, WeatherClient, openweather::RawWeatherResponse};
pub use units::{UnitSystem, letter_for_units};
pub use view::{build_city_view, build_comparison_view};

#[cfg(test)]
pub(crate) mod test_support;
