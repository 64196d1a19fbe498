//! Startup validation of the weather dataset.
//!
//! Runs once before the server binds. Verifies that both tables can be read
//! and reports what the dataset holds. An unreadable dataset aborts startup;
//! an empty one only warns, since the affected routes report it per request.

use tracing::{info, warn};

use climate_common::ClimateResult;
use storage::{SqliteStore, WeatherStore};

/// Summary of the dataset found at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub stations: i64,
    pub measurements: i64,
    pub latest_date: Option<String>,
}

/// Check the dataset and log its contents.
pub async fn validate_dataset(store: &SqliteStore) -> ClimateResult<DatasetSummary> {
    let (stations, measurements) = store.table_counts().await?;
    let latest_date = store.latest_date().await?;

    let summary = DatasetSummary {
        stations,
        measurements,
        latest_date,
    };

    if summary.measurements == 0 {
        warn!(
            stations = summary.stations,
            "Measurement table is empty; date-window routes will return errors"
        );
    } else {
        info!(
            stations = summary.stations,
            measurements = summary.measurements,
            latest_date = summary.latest_date.as_deref().unwrap_or_default(),
            "Dataset validated"
        );
    }

    Ok(summary)
}
