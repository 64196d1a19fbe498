//! Trailing date window helpers.
//!
//! Stored dates are `YYYY-MM-DD` strings, so string order equals calendar
//! order. Parsing only happens here, when a window start has to be derived
//! from the most recent date.

use chrono::{Duration, NaiveDate};

use crate::error::{ClimateError, ClimateResult};

/// Date format used by the dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "last year of data" window.
pub const WINDOW_DAYS: i64 = 365;

/// Compute the inclusive lower bound of the window ending at `latest`.
///
/// Returns the bound formatted back into the dataset's date format so it can
/// be compared lexically against stored dates.
pub fn window_start(latest: &str) -> ClimateResult<String> {
    let latest_date = NaiveDate::parse_from_str(latest, DATE_FORMAT)
        .map_err(|_| ClimateError::MalformedDate(latest.to_string()))?;

    let start = latest_date - Duration::days(WINDOW_DAYS);
    Ok(start.format(DATE_FORMAT).to_string())
}
