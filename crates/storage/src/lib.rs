//! Storage abstractions for the climate API.
//!
//! Provides read-only access to the two dataset tables:
//! - `station`: one row per weather station
//! - `measurement`: one row per station per date
//!
//! Backed by SQLite in production and by plain vectors in tests.

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{MeasurementFilter, WeatherStore};
