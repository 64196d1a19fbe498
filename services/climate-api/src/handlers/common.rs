//! Response helpers shared by the query handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use climate_common::{ClimateError, ClimateResult};

/// Minimal JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

/// Map a query error to an HTTP response without leaking its detail.
pub fn error_response(route: &str, err: &ClimateError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    tracing::error!(route, status = status.as_u16(), error = %err, "Query failed");

    let body = ErrorBody {
        error: err.public_message().to_string(),
        status: status.as_u16(),
    };

    (status, Json(body)).into_response()
}

/// Serialize a query result, or map its error.
pub fn query_response<T: Serialize>(route: &str, result: ClimateResult<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => error_response(route, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_response_hides_detail() {
        let err = ClimateError::Database("no such table: measurement".to_string());
        let response = error_response("/api/v1.0/tobs", &err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, 500);
        assert!(!body.error.contains("measurement"));
    }

    #[tokio::test]
    async fn test_unavailable_maps_to_503() {
        let err = ClimateError::DatasetUnavailable("pool closed".to_string());
        let response = error_response("/api/v1.0/stations", &err);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_query_response_ok_is_json() {
        let response = query_response("/api/v1.0/stations", Ok(vec!["USC1"]));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
