//! Query operations behind the API routes.
//!
//! Each operation takes the dataset accessor and returns a result shaped for
//! serialization. Date filters are lexical; only the trailing-year window
//! parses a date, and only the one read back from the dataset.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use climate_common::{window_start, ClimateError, ClimateResult};
use storage::{MeasurementFilter, WeatherStore};

/// One `{date, prcp}` entry of the precipitation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationRecord {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Temperature aggregate over a set of measurements.
///
/// Serializes as the fixed-shape array `[min, max, avg]`, with `null` in
/// every slot when no rows matched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}

impl TemperatureStats {
    /// Aggregate a sequence of temperature observations.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for tobs in observations {
            count += 1;
            sum += tobs;
            min = min.min(tobs);
            max = max.max(tobs);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            min: Some(min),
            max: Some(max),
            avg: Some(sum / count as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }
}

// Values are f64, so a whole-degree result serializes as `70.0`.
impl Serialize for TemperatureStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.min, self.max, self.avg).serialize(serializer)
    }
}

/// Most recent measurement date.
pub async fn most_recent_date(store: &dyn WeatherStore) -> ClimateResult<String> {
    store.latest_date().await?.ok_or(ClimateError::EmptyDataset)
}

/// First date of the trailing 365-day window ending at the most recent date.
pub async fn last_year_window_start(store: &dyn WeatherStore) -> ClimateResult<String> {
    let latest = most_recent_date(store).await?;
    let start = window_start(&latest)?;
    debug!(latest = %latest, window_start = %start, "Computed trailing window");
    Ok(start)
}

/// Every `(date, prcp)` pair in the trailing window, duplicates kept.
pub async fn precipitation_last_year(
    store: &dyn WeatherStore,
) -> ClimateResult<Vec<PrecipitationRecord>> {
    let start = last_year_window_start(store).await?;
    let rows = store
        .measurements(&MeasurementFilter::all().since(start))
        .await?;

    Ok(rows
        .into_iter()
        .map(|m| PrecipitationRecord {
            date: m.date,
            prcp: m.prcp,
        })
        .collect())
}

/// Station code of every station row, duplicates kept.
pub async fn list_stations(store: &dyn WeatherStore) -> ClimateResult<Vec<String>> {
    Ok(store
        .stations()
        .await?
        .into_iter()
        .map(|s| s.station)
        .collect())
}

/// Station with the most measurement rows in the trailing window.
///
/// Ties go to the lexically smallest station code.
pub async fn most_active_station(store: &dyn WeatherStore) -> ClimateResult<String> {
    let start = last_year_window_start(store).await?;
    let rows = store
        .measurements(&MeasurementFilter::all().since(start))
        .await?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for m in rows {
        *counts.entry(m.station).or_insert(0) += 1;
    }

    let mut best: Option<(String, usize)> = None;
    for (station, count) in counts {
        // Strictly greater keeps the first (smallest) code on ties
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((station, count));
        }
    }

    let (station, count) = best.ok_or(ClimateError::EmptyDataset)?;
    debug!(station = %station, count, "Selected most active station");
    Ok(station)
}

/// Every temperature observation of the most active station.
///
/// Only the station selection is windowed; the returned history covers the
/// whole dataset.
pub async fn most_active_station_temps(store: &dyn WeatherStore) -> ClimateResult<Vec<f64>> {
    let station = most_active_station(store).await?;
    let rows = store
        .measurements(&MeasurementFilter::all().for_station(station))
        .await?;

    Ok(rows.into_iter().map(|m| m.tobs).collect())
}

/// Temperature stats over rows dated on or after `start`.
pub async fn temperature_stats_from(
    store: &dyn WeatherStore,
    start: &str,
) -> ClimateResult<TemperatureStats> {
    let rows = store
        .measurements(&MeasurementFilter::all().since(start))
        .await?;

    Ok(TemperatureStats::from_observations(
        rows.into_iter().map(|m| m.tobs),
    ))
}

/// Temperature stats over rows dated between `start` and `end` inclusive.
pub async fn temperature_stats_range(
    store: &dyn WeatherStore,
    start: &str,
    end: &str,
) -> ClimateResult<TemperatureStats> {
    let rows = store
        .measurements(&MeasurementFilter::all().since(start).until(end))
        .await?;

    Ok(TemperatureStats::from_observations(
        rows.into_iter().map(|m| m.tobs),
    ))
}
