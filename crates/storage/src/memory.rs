//! In-memory weather store.

use async_trait::async_trait;

use climate_common::{ClimateResult, Measurement, Station};

use crate::store::{MeasurementFilter, WeatherStore};

/// Weather store holding both tables in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl MemoryStore {
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    pub fn with_station(mut self, station: Station) -> Self {
        self.stations.push(station);
        self
    }

    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }
}

#[async_trait]
impl WeatherStore for MemoryStore {
    async fn stations(&self) -> ClimateResult<Vec<Station>> {
        Ok(self.stations.clone())
    }

    async fn measurements(&self, filter: &MeasurementFilter) -> ClimateResult<Vec<Measurement>> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn latest_date(&self) -> ClimateResult<Option<String>> {
        Ok(self.measurements.iter().map(|m| m.date.clone()).max())
    }

    async fn ping(&self) -> ClimateResult<()> {
        Ok(())
    }
}
