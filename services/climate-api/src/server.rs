//! Router construction.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Extension, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router.
///
/// The fixed `/api/v1.0/*` routes are registered ahead of the `:start`
/// captures and, being static, always win over them.
pub fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::landing::landing_handler))
        // Fixed routes
        .route(
            "/api/v1.0/precipitation",
            get(handlers::precipitation::precipitation_handler),
        )
        .route(
            "/api/v1.0/stations",
            get(handlers::stations::stations_handler),
        )
        .route("/api/v1.0/tobs", get(handlers::tobs::tobs_handler))
        // Date captures
        .route(
            "/api/v1.0/:start",
            get(handlers::temperature::stats_from_handler),
        )
        .route(
            "/api/v1.0/:start/:end",
            get(handlers::temperature::stats_range_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
