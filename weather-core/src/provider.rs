use crate::{error::Result, provider::openweather::RawWeatherResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// One current-weather lookup against the upstream API.
///
/// `city` and `units` are passed through as given; `None` means the parameter is
/// left off the request entirely.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn current_weather(
        &self,
        city: Option<&str>,
        units: Option<&str>,
    ) -> Result<RawWeatherResponse>;
}
