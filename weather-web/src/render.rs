//! HTML pages for each view bundle.
//!
//! Pages are plain strings; every value that came from a request or from the
//! weather API goes through [`escape`] before it is interpolated.

use chrono::{DateTime, Local};
use weather_core::{CityWeatherView, ComparisonView, ErrorView, HomeView};

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; color: #222; }
h1 { font-size: 1.6rem; }
form { margin-bottom: 1.5rem; padding: 1rem; border: 1px solid #ddd; border-radius: 6px; }
label { display: block; margin: 0.4rem 0; }
.error { color: #a00; font-weight: bold; }
.muted { color: #666; }";

pub fn home_page(view: &HomeView) -> String {
    let units = units_select();
    let body = format!(
        r#"<h1>Weather</h1>
<form action="/results" method="get">
  <h2>Current weather</h2>
  <label>City <input type="text" name="city" required></label>
  <label>Units {units}</label>
  <button type="submit">Submit</button>
</form>
<form action="/comparison_results" method="get">
  <h2>Compare two cities</h2>
  <label>City 1 <input type="text" name="city1" required></label>
  <label>City 2 <input type="text" name="city2" required></label>
  <label>Units {units}</label>
  <button type="submit">Compare</button>
</form>
<form>
  <h2>Historical weather</h2>
  <label>Date <input type="date" name="date" min="{min}" max="{max}"></label>
  <p class="muted">Available from {min_long} to {max_long}.</p>
</form>"#,
        min = view.min_date.format(INPUT_DATE_FORMAT),
        max = view.max_date.format(INPUT_DATE_FORMAT),
        min_long = format_date(&view.min_date),
        max_long = format_date(&view.max_date),
    );

    layout("Weather", &body)
}

pub fn results_page(view: &CityWeatherView) -> String {
    let letter = view.units_letter;
    let body = format!(
        r#"<h1>Weather in {city}</h1>
<p class="muted">{date}</p>
<p>{description}</p>
<ul>
  <li>Temperature: {temp}&deg;{letter}</li>
  <li>Humidity: {humidity}%</li>
  <li>Wind speed: {wind} {speed_unit}</li>
  <li>Sunrise: {sunrise}</li>
  <li>Sunset: {sunset}</li>
</ul>
<p><a href="/">Back to home</a></p>"#,
        city = escape(&view.city),
        date = format_date(&view.date),
        description = escape(&view.description),
        temp = view.temp,
        humidity = view.humidity,
        wind = view.wind_speed,
        speed_unit = view.units.speed_unit(),
        sunrise = format_time(&view.sunrise),
        sunset = format_time(&view.sunset),
    );

    layout(&format!("Weather in {}", escape(&view.city)), &body)
}

pub fn comparison_page(view: &ComparisonView) -> String {
    let c1 = &view.city1_info;
    let c2 = &view.city2_info;
    let d = &view.deltas;
    let name1 = escape(&c1.city);
    let name2 = escape(&c2.city);
    let letter = view.units_letter;
    let speed_unit = view.units.speed_unit();

    let city_column = |name: &str, c: &weather_core::ComparedCity| {
        format!(
            r#"<td><strong>{name}</strong><br>{description}<br>{temp}&deg;{letter} (low {min}&deg;{letter}, high {max}&deg;{letter})<br>Humidity {humidity}%<br>Wind {wind} {speed_unit}<br>Sunset {sunset}</td>"#,
            description = escape(&c.description),
            temp = c.temp,
            min = c.temp_min,
            max = c.temp_max,
            humidity = c.humidity,
            wind = c.wind_speed,
            sunset = format_time(&c.sunset),
        )
    };

    let body = format!(
        r#"<h1>{name1} vs. {name2}</h1>
<p class="muted">{date}</p>
<table><tr>{col1}{col2}</tr></table>
<ul>
  <li>{name1} is {temp_diff}&deg;{letter} {temp_cmp} than {name2}.</li>
  <li>{name1} has {humidity_diff}% {humidity_cmp} humidity than {name2}.</li>
  <li>{name1} has winds that are {wind_diff} {speed_unit} {wind_cmp} than {name2}.</li>
  <li>{name1}'s sunset is {sunset_diff:.2} hours {sunset_cmp} than in {name2}.</li>
</ul>
<p><a href="/">Back to home</a></p>"#,
        date = format_date(&view.date),
        col1 = city_column(name1.as_str(), c1),
        col2 = city_column(name2.as_str(), c2),
        temp_diff = d.temp_diff,
        temp_cmp = d.temp_comparison,
        humidity_diff = d.humidity_diff,
        humidity_cmp = d.humidity_comparison,
        wind_diff = d.wind_speed_diff,
        wind_cmp = d.wind_speed_comparison,
        sunset_diff = d.sunset_diff,
        sunset_cmp = d.sunset_comparison,
    );

    layout(&format!("{name1} vs. {name2}"), &body)
}

pub fn error_page(view: &ErrorView) -> String {
    let body = format!(
        r#"<h1>Something went wrong</h1>
<p class="error">{message}</p>
<p><a href="/">Back to home</a></p>"#,
        message = escape(&view.message),
    );

    layout("Error", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{STYLE}
</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

fn units_select() -> &'static str {
    r#"<select name="units">
    <option value="imperial">Fahrenheit</option>
    <option value="metric">Celsius</option>
    <option value="standard">Kelvin</option>
  </select>"#
}

fn format_date(dt: &DateTime<Local>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

fn format_time(dt: &DateTime<Local>) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Minimal HTML escaping for text and double-quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
