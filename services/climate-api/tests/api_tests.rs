//! Router-level tests for the climate API.
//!
//! Requests are driven through the full router (routing, extensions and
//! middleware) with `tower::ServiceExt::oneshot`, against both the in-memory
//! store and a SQLite fixture file.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt;

use climate_api::server::create_router;
use climate_api::state::AppState;
use climate_common::{ClimateError, ClimateResult, Measurement, Station};
use storage::{MeasurementFilter, MemoryStore, SqliteStore, WeatherStore};
use test_utils::{assert_approx_eq, fixtures, write_sqlite_fixture};

// ============================================================================
// Helpers
// ============================================================================

fn router_for(store: Arc<dyn WeatherStore>) -> Router {
    create_router(
        Arc::new(AppState::with_store(store)),
        Duration::from_secs(5),
    )
}

fn fixture_router() -> Router {
    router_for(Arc::new(MemoryStore::new(
        fixtures::stations(),
        fixtures::measurements(),
    )))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    (status, content_type, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, content_type, body) = get(app, uri).await;
    assert_eq!(content_type.as_deref(), Some("application/json"), "{}", uri);
    (status, serde_json::from_slice(&body).unwrap())
}

/// Store whose every call fails as if the database went away.
struct UnavailableStore;

#[async_trait]
impl WeatherStore for UnavailableStore {
    async fn stations(&self) -> ClimateResult<Vec<Station>> {
        Err(unavailable())
    }

    async fn measurements(&self, _filter: &MeasurementFilter) -> ClimateResult<Vec<Measurement>> {
        Err(unavailable())
    }

    async fn latest_date(&self) -> ClimateResult<Option<String>> {
        Err(unavailable())
    }

    async fn ping(&self) -> ClimateResult<()> {
        Err(unavailable())
    }
}

fn unavailable() -> ClimateError {
    ClimateError::DatasetUnavailable("unable to open /srv/private/hawaii.sqlite".to_string())
}

// ============================================================================
// Landing page
// ============================================================================

#[tokio::test]
async fn test_root_lists_routes_as_html() {
    let (status, content_type, body) = get(fixture_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Welcome to the Hawaii Weather Data!"));
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/start/end"));
}

// ============================================================================
// Fixed routes
// ============================================================================

#[tokio::test]
async fn test_precipitation_last_year() {
    let (status, body) = get_json(fixture_router(), "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0], json!({"date": "2016-08-23", "prcp": 0.1}));
    assert_eq!(records[1], json!({"date": "2016-08-23", "prcp": null}));

    for record in records {
        assert!(record["date"].as_str().unwrap() >= fixtures::WINDOW_START);
        assert!(record.get("prcp").is_some());
    }
}

#[tokio::test]
async fn test_stations_not_captured_by_start_route() {
    let (status, body) = get_json(fixture_router(), "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["USC1", "USC2", "USC1"]));
}

#[tokio::test]
async fn test_tobs_most_active_station() {
    let (status, body) = get_json(fixture_router(), "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let temps: Vec<f64> = serde_json::from_value(body).unwrap();
    assert_eq!(temps, fixtures::MOST_ACTIVE_TOBS.to_vec());
}

// ============================================================================
// Temperature stats
// ============================================================================

#[tokio::test]
async fn test_stats_single_day_range() {
    let (status, body) =
        get_json(fixture_router(), "/api/v1.0/2017-01-01/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([70.0, 70.0, 70.0]));
}

#[tokio::test]
async fn test_stats_from_start() {
    let (status, body) = get_json(fixture_router(), "/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let stats: Vec<f64> = serde_json::from_value(body).unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0], 70.0);
    assert_eq!(stats[1], 78.0);
    assert_approx_eq!(stats[2], 73.0, 1e-9);
}

#[tokio::test]
async fn test_stats_no_match_is_null_triple() {
    for uri in [
        "/api/v1.0/2099-01-01",
        "/api/v1.0/2017-08-23/2016-08-23",
        "/api/v1.0/not-a-date",
    ] {
        let (status, body) = get_json(fixture_router(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([null, null, null]), "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = get(fixture_router(), "/api/v1.0/a/b/c").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(fixture_router(), "/api/v2.0/stations").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_empty_dataset() {
    let app = router_for(Arc::new(MemoryStore::default()));

    for uri in ["/api/v1.0/precipitation", "/api/v1.0/tobs"] {
        let (status, body) = get_json(app.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "No measurements available");
    }

    let (status, body) = get_json(app.clone(), "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(app, "/api/v1.0/2017-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([null, null, null]));
}

#[tokio::test]
async fn test_unavailable_store_returns_503_without_detail() {
    let app = router_for(Arc::new(UnavailableStore));

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2017-01-01",
        "/api/v1.0/2017-01-01/2017-02-01",
    ] {
        let (status, content_type, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let text = String::from_utf8(body).unwrap();
        assert!(!text.contains("/srv/private"), "{} leaked: {}", uri, text);
    }
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get_json(fixture_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(fixture_router(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ready": true, "database": "ok"}));
}

#[tokio::test]
async fn test_ready_reports_unavailable_store() {
    let app = router_for(Arc::new(UnavailableStore));

    let (status, body) = get_json(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert!(!body["database"].as_str().unwrap().contains("/srv/private"));
}

// ============================================================================
// SQLite-backed
// ============================================================================

#[tokio::test]
async fn test_sqlite_store_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    write_sqlite_fixture(&path, &fixtures::stations(), &fixtures::measurements())
        .await
        .unwrap();

    let store = SqliteStore::open(&path).await.unwrap();
    let sqlite_app = router_for(Arc::new(store));

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2017-01-01",
        "/api/v1.0/2016-08-23/2017-01-01",
        "/api/v1.0/2099-01-01",
    ] {
        let (sqlite_status, from_sqlite) = get_json(sqlite_app.clone(), uri).await;
        let (memory_status, from_memory) = get_json(fixture_router(), uri).await;

        assert_eq!(sqlite_status, memory_status, "{}", uri);
        assert_eq!(from_sqlite, from_memory, "{}", uri);
    }
}

#[tokio::test]
async fn test_state_from_config_opens_sqlite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hawaii.sqlite");
    write_sqlite_fixture(&path, &fixtures::stations(), &fixtures::measurements())
        .await
        .unwrap();

    let config = climate_api::config::ApiConfig::new(
        "127.0.0.1:0",
        &format!("sqlite://{}", path.display()),
        5,
        2,
    )
    .unwrap();

    let state = assert_ok!(AppState::new(&config).await);
    let app = create_router(Arc::new(state), config.request_timeout);

    let (status, body) = get_json(app, "/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["USC1", "USC2", "USC1"]));
}

#[tokio::test]
async fn test_state_from_config_missing_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sqlite");

    let config = climate_api::config::ApiConfig::new(
        "127.0.0.1:0",
        &path.display().to_string(),
        5,
        2,
    )
    .unwrap();

    assert_err!(AppState::new(&config).await.map(|_| ()));
    assert!(!path.exists());
}
