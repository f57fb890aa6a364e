use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode};
use tokio::net::TcpListener;
use weather_core::{
    CityWeatherView, ComparisonQuery, ComparisonView, Config, ErrorView, ViewOutcome,
    WeatherQuery, build_city_view, build_comparison_view,
};
use weather_web::{AppState, build_router};

const TIME_FORMAT: &str = "%H:%M";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for one or two cities")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web app.
    Serve {
        /// Listen address, e.g. "0.0.0.0:8080". Overrides the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Store the OpenWeather API key and options in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        city: String,

        /// "imperial", "metric", or anything else for Kelvin.
        #[arg(long, default_value = "imperial")]
        units: String,

        /// Print the view bundle as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compare current weather in two cities.
    Compare {
        city1: String,
        city2: String,

        /// Left off the API request when absent.
        #[arg(long)]
        units: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = self.load_config()?;

        match self.command {
            Command::Serve { bind } => {
                if let Some(bind) = bind {
                    config.bind = bind;
                }
                serve(&config).await
            }
            Command::Configure => configure(config, self.config),
            Command::Show { city, units, json } => {
                let state = AppState::from_config(&config)?;
                let query = WeatherQuery::new(city, units);
                let outcome = build_city_view(state.client.as_ref(), &query).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                    return Ok(());
                }
                match outcome {
                    ViewOutcome::Ready(view) => print_city(&view),
                    ViewOutcome::Unavailable(error) => print_error(&error),
                }
                Ok(())
            }
            Command::Compare { city1, city2, units, json } => {
                let state = AppState::from_config(&config)?;
                let query = ComparisonQuery { city1: Some(city1), city2: Some(city2), units };
                let outcome =
                    build_comparison_view(state.client.as_ref(), &query, state.strict_comparison)
                        .await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&outcome)?);
                    return Ok(());
                }
                match outcome {
                    ViewOutcome::Ready(view) => print_comparison(&view),
                    ViewOutcome::Unavailable(error) => print_error(&error),
                }
                Ok(())
            }
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => {
                let mut cfg = Config::load_from(path)?;
                cfg.apply_env_with(|name| std::env::var(name).ok());
                Ok(cfg)
            }
            None => Config::load(),
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let strict = Confirm::new("Show the error page when a compared city is not found?")
        .with_default(config.strict_comparison)
        .prompt()?;

    config.api_key = Some(api_key.trim().to_string());
    config.strict_comparison = strict;

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Configuration saved to {}", saved_to.display());
    Ok(())
}

fn print_city(view: &CityWeatherView) {
    let letter = view.units_letter;
    println!("{} ({})", view.city, view.date.format("%Y-%m-%d %H:%M"));
    println!("  {}", view.description);
    println!("  Temperature: {}°{letter}", view.temp);
    println!("  Humidity:    {}%", view.humidity);
    println!("  Wind:        {} {}", view.wind_speed, view.units.speed_unit());
    println!("  Sunrise:     {}", view.sunrise.format(TIME_FORMAT));
    println!("  Sunset:      {}", view.sunset.format(TIME_FORMAT));
}

fn print_comparison(view: &ComparisonView) {
    let (c1, c2, d) = (&view.city1_info, &view.city2_info, &view.deltas);
    let letter = view.units_letter;
    let speed = view.units.speed_unit();

    for c in [c1, c2] {
        println!(
            "{}: {}°{letter} ({}..{}), {}, humidity {}%, wind {} {speed}, sunset {}",
            c.city,
            c.temp,
            c.temp_min,
            c.temp_max,
            c.description,
            c.humidity,
            c.wind_speed,
            c.sunset.format(TIME_FORMAT),
        );
    }
    println!();
    println!("{} is {}°{letter} {} than {}.", c1.city, d.temp_diff, d.temp_comparison, c2.city);
    println!("Humidity is {}% {} than in {}.", d.humidity_diff, d.humidity_comparison, c2.city);
    println!("Wind is {} {speed} {} than in {}.", d.wind_speed_diff, d.wind_speed_comparison, c2.city);
    println!("Sunset is {:.2} hours {} than in {}.", d.sunset_diff, d.sunset_comparison, c2.city);
}

fn print_error(error: &ErrorView) {
    println!("{}", error.message);
}
