//! HTTP request handlers for the climate API.

pub mod common;
pub mod health;
pub mod landing;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;
