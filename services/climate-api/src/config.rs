//! Service configuration.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";

/// Default listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Validated settings the server is started with.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// `sqlite:` URL or file path of the dataset.
    pub database_url: String,

    /// Upper bound on the time spent serving one request.
    pub request_timeout: Duration,

    /// Maximum pooled dataset connections.
    pub max_connections: u32,
}

impl ApiConfig {
    /// Build and validate a configuration from raw values.
    pub fn new(
        listen: &str,
        database_url: &str,
        request_timeout_secs: u64,
        max_connections: u32,
    ) -> Result<Self> {
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("Invalid listen address: {}", listen))?;

        let database_url = database_url.trim();
        if database_url.is_empty() {
            bail!("Database URL must not be empty");
        }

        if request_timeout_secs == 0 {
            bail!("Request timeout must be at least one second");
        }

        if max_connections == 0 {
            bail!("Max connections must be at least 1");
        }

        Ok(Self {
            listen_addr,
            database_url: database_url.to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
            max_connections,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            max_connections: 4,
        }
    }
}
