//! Application state for the climate API.

use anyhow::{Context, Result};
use std::sync::Arc;

use storage::{SqliteStore, WeatherStore};

use crate::config::ApiConfig;
use crate::startup_validation::validate_dataset;

/// Shared application state.
pub struct AppState {
    /// Read-only dataset accessor, injected into every handler.
    pub store: Arc<dyn WeatherStore>,
}

impl AppState {
    /// Open and validate the dataset named by the configuration.
    pub async fn new(config: &ApiConfig) -> Result<Self> {
        let store = SqliteStore::connect(&config.database_url, config.max_connections)
            .await
            .with_context(|| format!("Failed to open dataset at {}", config.database_url))?;

        validate_dataset(&store)
            .await
            .context("Dataset validation failed")?;

        Ok(Self::with_store(Arc::new(store)))
    }

    /// Build state around an already constructed store.
    pub fn with_store(store: Arc<dyn WeatherStore>) -> Self {
        Self { store }
    }
}
