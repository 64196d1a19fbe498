//! Common types and utilities shared across the climate API crates.

pub mod error;
pub mod record;
pub mod window;

pub use error::{ClimateError, ClimateResult};
pub use record::{Measurement, Station};
pub use window::{window_start, DATE_FORMAT, WINDOW_DAYS};
