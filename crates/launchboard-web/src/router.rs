//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::charts::{api_outcome_chart, api_payload_chart, api_sites};
use crate::handlers::dashboard::dashboard;
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // API endpoints
        .route("/api/sites",          get(api_sites))
        .route("/api/charts/outcome", get(api_outcome_chart))
        .route("/api/charts/payload", get(api_payload_chart))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
