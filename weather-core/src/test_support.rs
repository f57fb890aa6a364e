use async_trait::async_trait;
use serde_json::{Value, json};
use std::{collections::HashMap, sync::Mutex};

use crate::{error::Result, provider::WeatherClient, provider::openweather::RawWeatherResponse};

type Call = (Option<String>, Option<String>);

/// Canned replies keyed by city; unknown cities get OpenWeather's 404 body.
#[derive(Debug, Default)]
pub struct StubClient {
    replies: HashMap<String, Value>,
    calls: Mutex<Vec<Call>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, city: &str, body: Value) -> Self {
        self.replies.insert(city.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherClient for StubClient {
    async fn current_weather(
        &self,
        city: Option<&str>,
        units: Option<&str>,
    ) -> Result<RawWeatherResponse> {
        self.calls.lock().unwrap().push((city.map(str::to_string), units.map(str::to_string)));

        let body = self
            .replies
            .get(city.unwrap_or_default())
            .cloned()
            .unwrap_or_else(|| json!({"cod": "404", "message": "city not found"}));

        Ok(RawWeatherResponse::new(body))
    }
}
