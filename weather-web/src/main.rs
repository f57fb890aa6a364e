//! Binary crate for the `weather` tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Serving the web app, or printing results in the terminal

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real deployments set the environment directly.
    dotenv::dotenv().ok();
    weather_web::telemetry::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
