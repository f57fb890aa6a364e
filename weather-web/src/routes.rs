use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use weather_core::{
    ComparisonQuery, HomeView, ViewOutcome, WeatherQuery, build_city_view, build_comparison_view,
};

use crate::{error::AppError, render, state::AppState};

/// Units used by `/results` when the form leaves them out.
pub const DEFAULT_UNITS: &str = "imperial";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/results", get(results))
        .route("/comparison_results", get(comparison_results))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsParams {
    pub city: Option<String>,
    pub units: Option<String>,
}

impl From<ResultsParams> for WeatherQuery {
    fn from(params: ResultsParams) -> Self {
        WeatherQuery::new(
            params.city.unwrap_or_default(),
            params.units.unwrap_or_else(|| DEFAULT_UNITS.to_string()),
        )
    }
}

/// No defaults here: whatever is missing stays missing all the way upstream.
#[derive(Debug, Default, Deserialize)]
pub struct ComparisonParams {
    pub city1: Option<String>,
    pub city2: Option<String>,
    pub units: Option<String>,
}

impl From<ComparisonParams> for ComparisonQuery {
    fn from(params: ComparisonParams) -> Self {
        ComparisonQuery { city1: params.city1, city2: params.city2, units: params.units }
    }
}

async fn home() -> Html<String> {
    Html(render::home_page(&HomeView::now()))
}

async fn results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Result<Html<String>, AppError> {
    let query = WeatherQuery::from(params);

    let page = match build_city_view(state.client.as_ref(), &query).await? {
        ViewOutcome::Ready(view) => render::results_page(&view),
        ViewOutcome::Unavailable(error) => {
            tracing::info!(city = ?query.city, "no weather for city");
            render::error_page(&error)
        }
    };

    Ok(Html(page))
}

async fn comparison_results(
    State(state): State<AppState>,
    Query(params): Query<ComparisonParams>,
) -> Result<Html<String>, AppError> {
    let query = ComparisonQuery::from(params);

    let page = match build_comparison_view(state.client.as_ref(), &query, state.strict_comparison)
        .await?
    {
        ViewOutcome::Ready(view) => render::comparison_page(&view),
        ViewOutcome::Unavailable(error) => {
            tracing::info!(city1 = ?query.city1, city2 = ?query.city2, "comparison unavailable");
            render::error_page(&error)
        }
    };

    Ok(Html(page))
}
