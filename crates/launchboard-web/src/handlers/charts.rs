//! JSON chart API — recomputes a ChartSpec from the current selection.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use launchboard_charts::{ChartSpec, PayloadRange, SiteSelection, ALL_SITES};

use crate::error::ApiError;
use crate::state::{AppState, SharedState};

#[derive(Debug, Deserialize, Default)]
pub struct OutcomeFilter {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PayloadFilter {
    pub site: Option<String>,
    pub min_kg: Option<f64>,
    pub max_kg: Option<f64>,
}

/// Resolve the raw `site` query value against the known sites. Anything
/// outside `ALL` plus the table's sites is rejected loudly rather than
/// silently mapped to a default.
fn parse_site(state: &AppState, raw: Option<&str>) -> Result<SiteSelection, ApiError> {
    let selection = SiteSelection::parse(raw.unwrap_or(ALL_SITES));
    if let Some(site) = selection.site() {
        if !state.table.has_site(site) {
            return Err(ApiError::bad_request(format!(
                "unknown launch site: {}",
                site
            )));
        }
    }
    Ok(selection)
}

/// GET /api/sites — the site selector options, in table order.
pub async fn api_sites(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(state.table.all_sites().to_vec())
}

/// GET /api/charts/outcome?site= — outcome pie for the selection.
pub async fn api_outcome_chart(
    State(state): State<SharedState>,
    Query(filter): Query<OutcomeFilter>,
) -> Result<Json<ChartSpec>, ApiError> {
    let selection = parse_site(&state, filter.site.as_deref())?;
    Ok(Json(state.summary.derive(&selection)))
}

/// GET /api/charts/payload?site=&min_kg=&max_kg= — filtered scatter.
/// Missing bounds default to the dataset's observed payload extent.
pub async fn api_payload_chart(
    State(state): State<SharedState>,
    Query(filter): Query<PayloadFilter>,
) -> Result<Json<ChartSpec>, ApiError> {
    let selection = parse_site(&state, filter.site.as_deref())?;

    let (observed_min, observed_max) = state.table.payload_extent();
    let range = PayloadRange::new(
        filter.min_kg.unwrap_or(observed_min),
        filter.max_kg.unwrap_or(observed_max),
    )
    .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(state.correlation.derive(&selection, &range)))
}
