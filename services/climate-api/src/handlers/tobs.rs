//! Temperature observations of the most active station.

use axum::{extract::Extension, response::Response};
use std::sync::Arc;

use super::common::query_response;
use crate::queries;
use crate::state::AppState;

/// GET /api/v1.0/tobs - Full temperature history of the station with the
/// most observations in the last year of data
pub async fn tobs_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    query_response(
        "/api/v1.0/tobs",
        queries::most_active_station_temps(state.store.as_ref()).await,
    )
}
