//! Fixture dataset with hand-checked answers.
//!
//! Rows (natural order):
//!
//! | # | station | date       | prcp | tobs |
//! |---|---------|------------|------|------|
//! | 1 | USC1    | 2016-08-22 | 0.5  | 75   |
//! | 2 | USC1    | 2016-08-23 | 0.1  | 76   |
//! | 3 | USC2    | 2016-08-23 | null | 74   |
//! | 4 | USC1    | 2017-01-01 | 0.0  | 70   |
//! | 5 | USC2    | 2017-05-10 | 0.3  | 72   |
//! | 6 | USC2    | 2017-05-10 | 0.3  | 72   |
//! | 7 | USC2    | 2017-08-23 | null | 78   |
//! | 8 | USC2    | 2010-01-01 | 1.2  | 65   |
//!
//! Rows 2-7 fall inside the trailing year. USC2 has four of them, USC1 two.

use climate_common::{Measurement, Station};

/// Most recent date in [`measurements`].
pub const LATEST_DATE: &str = "2017-08-23";

/// First date of the trailing year ending at [`LATEST_DATE`].
pub const WINDOW_START: &str = "2016-08-23";

/// Station with the most in-window rows.
pub const MOST_ACTIVE_STATION: &str = "USC2";

/// Every `tobs` recorded by [`MOST_ACTIVE_STATION`], in natural order.
pub const MOST_ACTIVE_TOBS: [f64; 5] = [74.0, 72.0, 72.0, 78.0, 65.0];

/// Station rows. USC1 appears twice.
pub fn stations() -> Vec<Station> {
    vec![
        Station::new("USC1"),
        Station::new("USC2"),
        Station::new("USC1"),
    ]
}

/// Measurement rows.
pub fn measurements() -> Vec<Measurement> {
    vec![
        Measurement::new("USC1", "2016-08-22", Some(0.5), 75.0),
        Measurement::new("USC1", "2016-08-23", Some(0.1), 76.0),
        Measurement::new("USC2", "2016-08-23", None, 74.0),
        Measurement::new("USC1", "2017-01-01", Some(0.0), 70.0),
        Measurement::new("USC2", "2017-05-10", Some(0.3), 72.0),
        Measurement::new("USC2", "2017-05-10", Some(0.3), 72.0),
        Measurement::new("USC2", "2017-08-23", None, 78.0),
        Measurement::new("USC2", "2010-01-01", Some(1.2), 65.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_date_matches_rows() {
        let max = measurements().into_iter().map(|m| m.date).max().unwrap();
        assert_eq!(max, LATEST_DATE);
    }

    #[test]
    fn test_most_active_tobs_matches_rows() {
        let tobs: Vec<f64> = measurements()
            .into_iter()
            .filter(|m| m.station == MOST_ACTIVE_STATION)
            .map(|m| m.tobs)
            .collect();
        assert_eq!(tobs, MOST_ACTIVE_TOBS);
    }
}
