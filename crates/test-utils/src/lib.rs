//! Shared test utilities for the climate API workspace.
//!
//! This crate provides common testing infrastructure including:
//! - A small fixture dataset with known answers
//! - Daily measurement series generators
//! - A writer that materialises records as a SQLite dataset file
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, write_sqlite_fixture};
//! ```

pub mod fixtures;
pub mod generators;
pub mod sqlite;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use sqlite::write_sqlite_fixture;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(73.3334_f64, 73.3333_f64, 0.001_f64); // passes
/// assert_approx_eq!(71.0_f64, 70.0_f64, 0.001_f64);       // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}
