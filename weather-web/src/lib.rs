//! HTTP front end for the weather app.
//!
//! This crate focuses on:
//! - Routing requests to the view builders in `weather-core`
//! - Rendering view bundles as HTML
//! - Logging setup shared by the server and the CLI

pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use routes::build_router;
pub use state::AppState;
