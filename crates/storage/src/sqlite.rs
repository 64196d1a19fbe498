//! SQLite-backed weather store using sqlx.
//!
//! The dataset file is opened read-only. Every query acquires a pooled
//! connection for its own duration and hands it back when the future
//! completes or is dropped, so a failed query never leaks a connection.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::{debug, info};

use climate_common::{ClimateError, ClimateResult, Measurement, Station};

use crate::store::{MeasurementFilter, WeatherStore};

// Numeric columns are cast so INTEGER-typed rows decode as f64 as well.
const MEASUREMENT_COLUMNS: &str = "SELECT station, date, \
     CAST(prcp AS REAL) AS prcp, CAST(tobs AS REAL) AS tobs \
     FROM measurement";

/// Read-only SQLite dataset.
#[derive(Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a dataset given a `sqlite:` URL or a plain file path.
    pub async fn connect(database_url: &str, max_connections: u32) -> ClimateResult<Self> {
        let options = if database_url.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(database_url)
                .map_err(|e| ClimateError::DatasetUnavailable(format!("Invalid URL: {}", e)))?
        } else {
            SqliteConnectOptions::new().filename(database_url)
        };

        Self::connect_with(options, max_connections).await
    }

    /// Open the dataset file at `path`.
    pub async fn open(path: &Path) -> ClimateResult<Self> {
        let options = SqliteConnectOptions::new().filename(path);
        Self::connect_with(options, 4).await
    }

    async fn connect_with(
        options: SqliteConnectOptions,
        max_connections: u32,
    ) -> ClimateResult<Self> {
        let options = options.read_only(true).create_if_missing(false);
        let filename = options.get_filename().display().to_string();

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| ClimateError::DatasetUnavailable(format!("Connection failed: {}", e)))?;

        info!(path = %filename, max_connections, "Opened weather dataset");

        Ok(Self { pool })
    }

    /// Count rows in both tables, used by startup validation.
    pub async fn table_counts(&self) -> ClimateResult<(i64, i64)> {
        let stations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let measurements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok((stations, measurements))
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl WeatherStore for SqliteStore {
    async fn stations(&self) -> ClimateResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, StationRow>("SELECT station FROM station ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn measurements(&self, filter: &MeasurementFilter) -> ClimateResult<Vec<Measurement>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(MEASUREMENT_COLUMNS);
        query.push(" WHERE 1 = 1");

        if let Some(ref from) = filter.from {
            query.push(" AND date >= ").push_bind(from.clone());
        }
        if let Some(ref to) = filter.to {
            query.push(" AND date <= ").push_bind(to.clone());
        }
        if let Some(ref station) = filter.station {
            query.push(" AND station = ").push_bind(station.clone());
        }
        query.push(" ORDER BY rowid");

        let rows = query
            .build_query_as::<MeasurementRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(rows = rows.len(), ?filter, "Fetched measurements");

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn latest_date(&self) -> ClimateResult<Option<String>> {
        sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> ClimateResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

/// Classify a sqlx failure as connectivity loss or a query error.
fn map_sqlx_error(err: sqlx::Error) -> ClimateError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ClimateError::DatasetUnavailable(err.to_string())
        }
        other => ClimateError::Database(other.to_string()),
    }
}

#[derive(FromRow)]
struct StationRow {
    station: String,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            station: row.station,
        }
    }
}

#[derive(FromRow)]
struct MeasurementRow {
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: f64,
}

impl From<MeasurementRow> for Measurement {
    fn from(row: MeasurementRow) -> Self {
        Measurement {
            station: row.station,
            date: row.date,
            prcp: row.prcp,
            tobs: row.tobs,
        }
    }
}
