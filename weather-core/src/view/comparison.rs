use chrono::Local;

use crate::{
    error::{Result, WeatherError},
    model::{
        ComparedCity, ComparisonDeltas, ComparisonQuery, ComparisonView, ErrorView,
        MagnitudeComparison, TemperatureComparison, TimeComparison, ViewOutcome,
    },
    provider::{WeatherClient, openweather::unix_to_local},
};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Look up both cities and shape the comparison page.
///
/// With `check_status` off, a reply without a success `cod` is not treated
/// specially and fails field extraction instead. With it on, such a reply yields
/// the same [`ViewOutcome::Unavailable`] the single-city page uses.
pub async fn build_comparison_view(
    client: &dyn WeatherClient,
    query: &ComparisonQuery,
    check_status: bool,
) -> Result<ViewOutcome<ComparisonView>> {
    let units = query.units.as_deref();

    let Some(city1_info) = fetch_city(client, query.city1.as_deref(), units, check_status).await?
    else {
        return Ok(ViewOutcome::Unavailable(ErrorView::not_found()));
    };
    let Some(city2_info) = fetch_city(client, query.city2.as_deref(), units, check_status).await?
    else {
        return Ok(ViewOutcome::Unavailable(ErrorView::not_found()));
    };

    let deltas = ComparisonDeltas::between(&city1_info, &city2_info);
    let unit_system = query.unit_system();

    Ok(ViewOutcome::Ready(ComparisonView {
        city1_info,
        city2_info,
        date: Local::now(),
        deltas,
        units: unit_system,
        units_letter: unit_system.letter(),
    }))
}

/// `Ok(None)` only when `check_status` is set and the reply was not a success.
async fn fetch_city(
    client: &dyn WeatherClient,
    city: Option<&str>,
    units: Option<&str>,
    check_status: bool,
) -> Result<Option<ComparedCity>> {
    let raw = client.current_weather(city, units).await?;

    if check_status && !raw.is_success() {
        return Ok(None);
    }

    let conditions = raw.conditions()?;

    Ok(Some(ComparedCity {
        city: city.unwrap_or_default().to_string(),
        temp: conditions.temp,
        description: conditions.description,
        humidity: conditions.humidity,
        wind_speed: conditions.wind_speed,
        sunset: unix_to_local(conditions.sunset)?,
        temp_min: conditions.temp_min.ok_or(WeatherError::MissingField("main.temp_min"))?,
        temp_max: conditions.temp_max.ok_or(WeatherError::MissingField("main.temp_max"))?,
    }))
}

impl ComparisonDeltas {
    /// Every comparison asks a strict question about city 1, so equal values land
    /// on the negative answer: "colder", "less", "later".
    pub fn between(city1: &ComparedCity, city2: &ComparedCity) -> Self {
        let temp_comparison = if city1.temp > city2.temp {
            TemperatureComparison::Warmer
        } else {
            TemperatureComparison::Colder
        };

        let humidity_comparison = if city1.humidity > city2.humidity {
            MagnitudeComparison::Greater
        } else {
            MagnitudeComparison::Less
        };

        let wind_speed_comparison = if city1.wind_speed > city2.wind_speed {
            MagnitudeComparison::Greater
        } else {
            MagnitudeComparison::Less
        };

        let sunset_seconds = (city1.sunset - city2.sunset).num_seconds().abs();
        let sunset_comparison = if city1.sunset < city2.sunset {
            TimeComparison::Earlier
        } else {
            TimeComparison::Later
        };

        Self {
            temp_diff: (city1.temp - city2.temp).abs(),
            temp_comparison,
            humidity_diff: city1.humidity.abs_diff(city2.humidity),
            humidity_comparison,
            wind_speed_diff: (city1.wind_speed - city2.wind_speed).abs(),
            wind_speed_comparison,
            sunset_diff: sunset_seconds as f64 / SECONDS_PER_HOUR,
            sunset_comparison,
        }
    }
}
