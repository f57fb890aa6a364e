use chrono::Local;

use crate::{
    error::Result,
    model::{CityWeatherView, ErrorView, ViewOutcome, WeatherQuery},
    provider::{WeatherClient, openweather::unix_to_local},
};

/// Look up one city and shape the results page.
///
/// A reply without a success `cod` becomes [`ViewOutcome::Unavailable`] and none
/// of its other fields are read. Transport failures and malformed success
/// replies are returned as errors.
pub async fn build_city_view(
    client: &dyn WeatherClient,
    query: &WeatherQuery,
) -> Result<ViewOutcome<CityWeatherView>> {
    let raw = client.current_weather(query.city.as_deref(), query.units.as_deref()).await?;

    if !raw.is_success() {
        return Ok(ViewOutcome::Unavailable(ErrorView::not_found()));
    }

    let conditions = raw.conditions()?;
    let units = query.unit_system();

    Ok(ViewOutcome::Ready(CityWeatherView {
        date: Local::now(),
        city: conditions.name,
        description: conditions.description,
        temp: conditions.temp,
        humidity: conditions.humidity,
        wind_speed: conditions.wind_speed,
        sunrise: unix_to_local(conditions.sunrise)?,
        sunset: unix_to_local(conditions.sunset)?,
        units,
        units_letter: units.letter(),
    }))
}
