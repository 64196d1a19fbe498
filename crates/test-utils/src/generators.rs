//! Generators for synthetic measurement series.
//!
//! These create predictable, verifiable data so tests can compute expected
//! answers without a lookup table.

use chrono::{Duration, NaiveDate};
use climate_common::{Measurement, DATE_FORMAT};

/// Creates one measurement per day for `days` consecutive days.
///
/// `tobs` for day `i` is `base_tobs + (i % 10)`, and `prcp` is null on every
/// seventh day, otherwise `i / 100`.
///
/// # Example
///
/// ```
/// use test_utils::daily_series;
///
/// let series = daily_series("USC1", "2017-01-30", 3, 60.0);
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[2].date, "2017-02-01");
/// assert_eq!(series[2].tobs, 62.0);
/// ```
pub fn daily_series(station: &str, start: &str, days: usize, base_tobs: f64) -> Vec<Measurement> {
    let start = NaiveDate::parse_from_str(start, DATE_FORMAT)
        .unwrap_or_else(|_| panic!("invalid start date: {}", start));

    (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let prcp = if i % 7 == 6 {
                None
            } else {
                Some(i as f64 / 100.0)
            };
            Measurement::new(
                station,
                date.format(DATE_FORMAT).to_string(),
                prcp,
                base_tobs + (i % 10) as f64,
            )
        })
        .collect()
}

/// Creates a flat series of `count` rows on the same date.
///
/// Useful for skewing per-station row counts.
pub fn repeated_rows(station: &str, date: &str, count: usize, tobs: f64) -> Vec<Measurement> {
    (0..count)
        .map(|_| Measurement::new(station, date, Some(0.0), tobs))
        .collect()
}
