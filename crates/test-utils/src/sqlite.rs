//! Materialise fixture records as a SQLite dataset file.
//!
//! The schema mirrors the published Hawaii climate database: both tables
//! carry an integer primary key so natural order is insertion order.

use std::path::Path;

use climate_common::{Measurement, Station};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

const SCHEMA_SQL: &str = r#"
CREATE TABLE station (
    id INTEGER PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
);
CREATE TABLE measurement (
    id INTEGER PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)
"#;

/// Create a new SQLite file at `path` containing the given rows.
///
/// The pool is closed before returning so the file can be reopened
/// read-only right away.
pub async fn write_sqlite_fixture(
    path: &Path,
    stations: &[Station],
    measurements: &[Measurement],
) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .journal_mode(SqliteJournalMode::Delete)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    for statement in SCHEMA_SQL.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&pool).await?;
        }
    }

    let mut tx = pool.begin().await?;

    for station in stations {
        sqlx::query("INSERT INTO station (station, name) VALUES (?, ?)")
            .bind(&station.station)
            .bind(format!("{} fixture station", station.station))
            .execute(&mut *tx)
            .await?;
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    pool.close().await;

    Ok(())
}
