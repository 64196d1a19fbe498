//! Climate API Service Library
//!
//! HTTP server exposing precipitation and temperature queries over a
//! read-only station/measurement dataset.

pub mod config;
pub mod handlers;
pub mod queries;
pub mod server;
pub mod startup_validation;
pub mod state;
