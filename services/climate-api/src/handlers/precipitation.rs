//! Precipitation handler.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use super::common::query_response;
use crate::queries;
use crate::state::AppState;

/// GET /api/v1.0/precipitation - `{date, prcp}` for the last year of data
pub async fn precipitation_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let result = queries::precipitation_last_year(state.store.as_ref()).await;

    if let Ok(ref records) = result {
        tracing::debug!(rows = records.len(), "Precipitation query complete");
    }

    query_response("/api/v1.0/precipitation", result)
}
