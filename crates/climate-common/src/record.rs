//! Record types for the two tables of the weather dataset.

use serde::{Deserialize, Serialize};

/// A weather-recording location, identified by its station code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station code (e.g., "USC00519397").
    pub station: String,
}

impl Station {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
        }
    }
}

/// One dated observation at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Station code, references [`Station::station`].
    pub station: String,

    /// Observation date as stored (`YYYY-MM-DD`). Kept as a string so that
    /// comparisons stay lexical.
    pub date: String,

    /// Precipitation amount, absent for some days.
    pub prcp: Option<f64>,

    /// Temperature observation.
    pub tobs: f64,
}

impl Measurement {
    pub fn new(
        station: impl Into<String>,
        date: impl Into<String>,
        prcp: Option<f64>,
        tobs: f64,
    ) -> Self {
        Self {
            station: station.into(),
            date: date.into(),
            prcp,
            tobs,
        }
    }
}
