//! Dataset accessor trait and measurement filters.

use async_trait::async_trait;

use climate_common::{ClimateResult, Measurement, Station};

/// Read-only access to the station and measurement tables.
///
/// Implementations must return rows in the dataset's natural order and must
/// not deduplicate.
#[async_trait]
pub trait WeatherStore: Send + Sync {
    /// Every station row.
    async fn stations(&self) -> ClimateResult<Vec<Station>>;

    /// Every measurement row matching `filter`.
    async fn measurements(&self, filter: &MeasurementFilter) -> ClimateResult<Vec<Measurement>>;

    /// Lexically greatest measurement date, `None` when there are no rows.
    async fn latest_date(&self) -> ClimateResult<Option<String>>;

    /// Verify the store can still serve queries.
    async fn ping(&self) -> ClimateResult<()>;
}

/// Row filter for measurement queries.
///
/// Date bounds are inclusive and compared as strings, not as calendar dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementFilter {
    /// Inclusive lower date bound.
    pub from: Option<String>,

    /// Inclusive upper date bound.
    pub to: Option<String>,

    /// Station code to match exactly.
    pub station: Option<String>,
}

impl MeasurementFilter {
    /// Filter matching every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn since(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn until(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn for_station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    /// Check whether a measurement passes this filter.
    pub fn matches(&self, measurement: &Measurement) -> bool {
        if let Some(ref from) = self.from {
            if measurement.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(ref to) = self.to {
            if measurement.date.as_str() > to.as_str() {
                return false;
            }
        }
        if let Some(ref station) = self.station {
            if &measurement.station != station {
                return false;
            }
        }
        true
    }
}
