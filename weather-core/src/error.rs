use thiserror::Error;

/// Failures raised while talking to the weather API or reading its reply.
///
/// A non-success `cod` in an otherwise well-formed body is not an error at this
/// level; callers inspect [`RawWeatherResponse::is_success`] and decide.
///
/// [`RawWeatherResponse::is_success`]: crate::provider::openweather::RawWeatherResponse::is_success
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to reach the weather API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather API returned a body that is not JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("weather API response is missing or has a malformed field: {0}")]
    Extraction(#[source] serde_json::Error),

    #[error("weather API response has no `{0}`")]
    MissingField(&'static str),

    #[error("epoch timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
