//! Error types for the climate API.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for dataset and query operations.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Data Errors ===
    #[error("No measurements available in dataset")]
    EmptyDataset,

    #[error("Malformed date in dataset: {0}")]
    MalformedDate(String),

    // === Storage Errors ===
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::DatasetUnavailable(_) => 503,
            ClimateError::EmptyDataset
            | ClimateError::MalformedDate(_)
            | ClimateError::Database(_) => 500,
        }
    }

    /// Message safe to return to API clients.
    ///
    /// Never includes the underlying detail (SQL text, file paths, row values).
    pub fn public_message(&self) -> &'static str {
        match self {
            ClimateError::EmptyDataset => "No measurements available",
            ClimateError::MalformedDate(_) => "Dataset contains an unreadable date",
            ClimateError::DatasetUnavailable(_) => "Dataset unavailable",
            ClimateError::Database(_) => "Internal server error",
        }
    }
}
