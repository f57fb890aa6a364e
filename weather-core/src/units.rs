use serde::Serialize;

/// Unit system requested from the weather API.
///
/// The raw `units` parameter is always forwarded to the API untouched; this type
/// only decides how values are labelled on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
    /// Kelvin. Anything the API does not recognise falls back to this.
    Standard,
}

impl UnitSystem {
    pub fn from_param(units: Option<&str>) -> Self {
        match units {
            Some("imperial") => UnitSystem::Imperial,
            Some("metric") => UnitSystem::Metric,
            _ => UnitSystem::Standard,
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "F",
            UnitSystem::Metric => "C",
            UnitSystem::Standard => "K",
        }
    }

    pub fn speed_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mph",
            UnitSystem::Metric | UnitSystem::Standard => "m/s",
        }
    }
}

/// Shorthand temperature letter for a `units` parameter.
pub fn letter_for_units(units: Option<&str>) -> &'static str {
    UnitSystem::from_param(units).letter()
}
