use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    config::Config,
    error::{Result, WeatherError},
};

use super::WeatherClient;

/// `cod` value OpenWeather reports for a successful lookup.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    api_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { api_key, api_url, http })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;
        let client =
            Self::new(api_key.to_owned(), config.api_url.clone(), config.request_timeout())?;
        Ok(client)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn current_weather(
        &self,
        city: Option<&str>,
        units: Option<&str>,
    ) -> Result<RawWeatherResponse> {
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(3);
        if let Some(city) = city {
            params.push(("q", city));
        }
        params.push(("appid", self.api_key.as_str()));
        if let Some(units) = units {
            params.push(("units", units));
        }

        tracing::debug!(?city, ?units, url = %self.api_url, "requesting current weather");

        let res = self.http.get(&self.api_url).query(&params).send().await?;

        // OpenWeather mirrors failures in the body's `cod`, so the HTTP status is
        // left for the caller to judge through the body.
        let http_status = res.status();
        let body = res.text().await?;

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%http_status, body = %truncate_body(&body), "weather API body is not JSON");
            WeatherError::InvalidBody(e)
        })?;

        let raw = RawWeatherResponse::new(json);
        if !raw.is_success() {
            tracing::info!(
                ?city,
                %http_status,
                cod = ?raw.status_code(),
                upstream_message = raw.message().unwrap_or_default(),
                "weather API reported a failure"
            );
        }

        Ok(raw)
    }
}

/// Decoded but unvalidated body of a current-weather response.
///
/// Only [`status_code`](Self::status_code) is meaningful until the caller has
/// checked [`is_success`](Self::is_success); [`conditions`](Self::conditions)
/// decodes the rest strictly.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWeatherResponse {
    body: Value,
}

impl RawWeatherResponse {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The `cod` field. OpenWeather sends an integer on success and a string such
    /// as `"404"` on failure; both are read here.
    pub fn status_code(&self) -> Option<i64> {
        match self.body.get("cod")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// True only for an integer `cod` of 200.
    pub fn is_success(&self) -> bool {
        self.body.get("cod").and_then(Value::as_i64) == Some(SUCCESS_CODE)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    pub fn conditions(&self) -> Result<CurrentConditions> {
        let parsed = OwCurrentResponse::deserialize(&self.body).map_err(WeatherError::Extraction)?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or(WeatherError::MissingField("weather[0]"))?;

        Ok(CurrentConditions {
            name: parsed.name,
            description,
            temp: parsed.main.temp,
            temp_min: parsed.main.temp_min,
            temp_max: parsed.main.temp_max,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
        })
    }
}

/// The fields this app reads from a current-weather response.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub name: String,
    pub description: String,
    pub temp: f64,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: u8,
    pub wind_speed: f64,
    /// Epoch seconds.
    pub sunrise: i64,
    /// Epoch seconds.
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

/// Epoch seconds to the server's local calendar time.
pub fn unix_to_local(ts: i64) -> Result<DateTime<Local>> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(WeatherError::InvalidTimestamp(ts))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
