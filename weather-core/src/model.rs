use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

use crate::units::UnitSystem;

/// Message shown whenever a lookup comes back without a success `cod`.
pub const NOT_FOUND_MESSAGE: &str = "City not found or API error.";

/// City and units as read from the request. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub units: Option<String>,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, units: impl Into<String>) -> Self {
        Self { city: Some(city.into()), units: Some(units.into()) }
    }

    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_param(self.units.as_deref())
    }
}

/// Two cities sharing one `units` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonQuery {
    pub city1: Option<String>,
    pub city2: Option<String>,
    pub units: Option<String>,
}

impl ComparisonQuery {
    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_param(self.units.as_deref())
    }
}

/// Either a finished view, or the generic error page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ViewOutcome<T> {
    Ready(T),
    Unavailable(ErrorView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    pub fn not_found() -> Self {
        Self { message: NOT_FOUND_MESSAGE.to_string() }
    }
}

/// Context for the landing page: the date window offered for historical lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub min_date: DateTime<Local>,
    pub max_date: DateTime<Local>,
}

/// Single-city results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityWeatherView {
    pub date: DateTime<Local>,
    pub city: String,
    pub description: String,
    pub temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub sunrise: DateTime<Local>,
    pub sunset: DateTime<Local>,
    pub units: UnitSystem,
    pub units_letter: &'static str,
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedCity {
    /// The city as typed by the user, not the name the API resolved it to.
    pub city: String,
    pub temp: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub sunset: DateTime<Local>,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureComparison {
    Warmer,
    Colder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeComparison {
    Greater,
    Less,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeComparison {
    Earlier,
    Later,
}

impl TemperatureComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warmer => "warmer",
            Self::Colder => "colder",
        }
    }
}

impl MagnitudeComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::Less => "less",
        }
    }
}

impl TimeComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earlier => "earlier",
            Self::Later => "later",
        }
    }
}

impl fmt::Display for TemperatureComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MagnitudeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Differences between two cities, always phrased from city 1's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonDeltas {
    pub temp_diff: f64,
    pub temp_comparison: TemperatureComparison,
    pub humidity_diff: u8,
    pub humidity_comparison: MagnitudeComparison,
    pub wind_speed_diff: f64,
    pub wind_speed_comparison: MagnitudeComparison,
    /// Fractional hours.
    pub sunset_diff: f64,
    pub sunset_comparison: TimeComparison,
}

/// Two-city comparison page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub city1_info: ComparedCity,
    pub city2_info: ComparedCity,
    pub date: DateTime<Local>,
    #[serde(flatten)]
    pub deltas: ComparisonDeltas,
    pub units: UnitSystem,
    pub units_letter: &'static str,
}
