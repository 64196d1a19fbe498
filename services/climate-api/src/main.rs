//! Climate API Server
//!
//! Read-only HTTP API over the Hawaii station weather dataset.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use climate_api::config::{ApiConfig, DEFAULT_DATABASE_URL, DEFAULT_LISTEN_ADDR};
use climate_api::server::create_router;
use climate_api::state::AppState;

/// Climate API Server
#[derive(Parser, Debug)]
#[command(name = "climate-api")]
#[command(about = "Read-only HTTP API over historical station weather data")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR, env = "CLIMATE_LISTEN_ADDR")]
    listen: String,

    /// Dataset location (sqlite: URL or file path)
    #[arg(long, default_value = DEFAULT_DATABASE_URL, env = "DATABASE_URL")]
    database_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30", env = "CLIMATE_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// Maximum pooled dataset connections
    #[arg(long, default_value = "4", env = "CLIMATE_DB_MAX_CONNECTIONS")]
    max_connections: u32,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "CLIMATE_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async move {
        if let Err(e) = run_server(args).await {
            tracing::error!("Server failed: {:#}", e);
            std::process::exit(1);
        }
    });

    Ok(())
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting climate API server");

    let config = ApiConfig::new(
        &args.listen,
        &args.database_url,
        args.request_timeout_secs,
        args.max_connections,
    )?;

    // Dataset problems are fatal at startup
    let state = Arc::new(AppState::new(&config).await?);

    let app = create_router(state, config.request_timeout);

    info!(
        addr = %config.listen_addr,
        timeout_secs = config.request_timeout.as_secs(),
        "Climate API listening"
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Climate API stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
