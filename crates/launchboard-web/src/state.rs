//! Shared application state for the web server.

use std::sync::Arc;

use launchboard_charts::{OutcomeSummary, PayloadCorrelation};
use launchboard_data::LaunchTable;

/// Shared state injected into every Axum handler. The table is loaded
/// once at startup and read-only afterwards, so handlers share it
/// without any locking.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<LaunchTable>,
    pub summary: OutcomeSummary,
    pub correlation: PayloadCorrelation,
}

impl AppState {
    pub fn new(table: LaunchTable) -> Self {
        let table = Arc::new(table);
        Self {
            summary: OutcomeSummary::new(table.clone()),
            correlation: PayloadCorrelation::new(table.clone()),
            table,
        }
    }
}

pub type SharedState = Arc<AppState>;
