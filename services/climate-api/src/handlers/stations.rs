//! Station list handler.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use super::common::query_response;
use crate::queries;
use crate::state::AppState;

/// GET /api/v1.0/stations - Every station code
pub async fn stations_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    query_response(
        "/api/v1.0/stations",
        queries::list_stations(state.store.as_ref()).await,
    )
}
