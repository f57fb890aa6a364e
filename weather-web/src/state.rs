use std::sync::Arc;

use weather_core::{Config, OpenWeatherClient, WeatherClient};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: Arc<dyn WeatherClient>,
    /// Check `cod` on comparisons as well as single-city lookups.
    pub strict_comparison: bool,
}

impl AppState {
    pub fn new(client: Arc<dyn WeatherClient>, strict_comparison: bool) -> Self {
        Self { client, strict_comparison }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = OpenWeatherClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.strict_comparison))
    }
}
