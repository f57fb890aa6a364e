//! Builders that turn API replies into display-ready bundles.
//!
//! Every bundle is request-scoped: built at the start of a handler and dropped
//! when the response is written.

use chrono::{DateTime, Duration, Local};

use crate::model::HomeView;

pub mod comparison;
pub mod results;

pub use comparison::build_comparison_view;
pub use results::build_city_view;

/// How far back the home page offers historical lookups.
pub const HISTORY_WINDOW_DAYS: i64 = 5;

impl HomeView {
    pub fn at(now: DateTime<Local>) -> Self {
        Self { min_date: now - Duration::days(HISTORY_WINDOW_DAYS), max_date: now }
    }

    pub fn now() -> Self {
        Self::at(Local::now())
    }
}
