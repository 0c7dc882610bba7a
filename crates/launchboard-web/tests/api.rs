//! Integration tests for the JSON chart API.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use launchboard_data::{LaunchRecord, LaunchTable};
use launchboard_web::router::build_router;
use launchboard_web::state::AppState;

fn record(site: &str, outcome: u8, payload: f64, booster: &str) -> LaunchRecord {
    LaunchRecord {
        site: site.to_string(),
        outcome,
        payload_mass_kg: payload,
        booster_category: booster.to_string(),
    }
}

fn app() -> Router {
    let table = LaunchTable::from_records(vec![
        record("A", 1, 500.0, "v1"),
        record("A", 0, 1500.0, "v2"),
        record("B", 1, 3000.0, "v1"),
    ])
    .unwrap();
    build_router(AppState::new(table))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn sites_endpoint_lists_sites_in_table_order() {
    let (status, json) = get_json(app(), "/api/sites").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!(["A", "B"]));
}

#[tokio::test]
async fn outcome_chart_for_all_sites_is_a_pie_per_site() {
    let (status, json) = get_json(app(), "/api/charts/outcome?site=ALL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "pie");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["rows"][0]["site"], "A");
    assert_eq!(json["rows"][0]["mean_outcome"], 0.5);
    assert_eq!(json["rows"][1]["site"], "B");
    assert_eq!(json["rows"][1]["mean_outcome"], 1.0);
}

#[tokio::test]
async fn outcome_chart_defaults_to_all_sites() {
    let (status, json) = get_json(app(), "/api/charts/outcome").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["encoding"]["names"], "site");
}

#[tokio::test]
async fn unknown_site_is_rejected() {
    let (status, json) = get_json(app(), "/api/charts/outcome?site=Nowhere").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Nowhere"));
}

#[tokio::test]
async fn payload_chart_filters_by_inclusive_range() {
    let (status, json) =
        get_json(app(), "/api/charts/payload?site=ALL&min_kg=500&max_kg=1500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kind"], "scatter");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["payload_mass_kg"], 500.0);
    assert_eq!(rows[1]["payload_mass_kg"], 1500.0);
}

#[tokio::test]
async fn payload_chart_defaults_to_observed_extent() {
    let (status, json) = get_json(app(), "/api/charts/payload?site=ALL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn inverted_payload_range_is_rejected() {
    let (status, json) =
        get_json(app(), "/api/charts/payload?site=ALL&min_kg=2000&max_kg=1000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("inverted"));
}

#[tokio::test]
async fn out_of_range_filter_yields_empty_scatter_not_error() {
    let (status, json) =
        get_json(app(), "/api/charts/payload?site=B&min_kg=4000&max_kg=9000").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_page_renders_site_options() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"<option value="ALL""#));
    assert!(html.contains(r#"<option value="A">A</option>"#));
    assert!(html.contains(r#"<option value="B">B</option>"#));
}
