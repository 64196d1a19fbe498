//! Temperature statistics handlers.
//!
//! Path segments are passed through as-is. Bounds are compared as strings,
//! so a malformed date yields `[null, null, null]` rather than an error.

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use std::sync::Arc;

use super::common::query_response;
use crate::queries;
use crate::state::AppState;

/// GET /api/v1.0/:start - `[min, max, avg]` of tobs on or after `start`
pub async fn stats_from_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    tracing::debug!(start = %start, "Temperature stats from");
    query_response(
        "/api/v1.0/:start",
        queries::temperature_stats_from(state.store.as_ref(), &start).await,
    )
}

/// GET /api/v1.0/:start/:end - `[min, max, avg]` of tobs between `start`
/// and `end` inclusive
pub async fn stats_range_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    tracing::debug!(start = %start, end = %end, "Temperature stats range");
    query_response(
        "/api/v1.0/:start/:end",
        queries::temperature_stats_range(state.store.as_ref(), &start, &end).await,
    )
}
