//! SQLite-backed climate store
//!
//! Queries the `station` and `measurement` tables through a read-only sqlx
//! pool. Every operation checks out one connection and runs all of its
//! queries on it; the connection goes back to the pool when it is dropped.

use async_trait::async_trait;
use shared::{DateRange, PrecipitationByDate, TemperatureObservation, TemperatureStats};
use sqlx::SqliteConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::debug;

use crate::core::cutoff_for_stored;
use crate::error::WebServerResult;
use crate::traits::ClimateStore;
use crate::types::{Measurement, Station};

const LATEST_DATE_SQL: &str = "SELECT MAX(date) FROM measurement";
const LATEST_STATION_DATE_SQL: &str = "SELECT MAX(date) FROM measurement WHERE station = ?";
const MEASUREMENTS_SINCE_SQL: &str =
    "SELECT station, date, prcp, tobs FROM measurement WHERE date >= ?";
const STATION_MEASUREMENTS_SINCE_SQL: &str =
    "SELECT station, date, prcp, tobs FROM measurement WHERE station = ? AND date >= ?";
const STATIONS_SQL: &str = "SELECT station, name, latitude, longitude, elevation FROM station";
const MOST_ACTIVE_SQL: &str = "SELECT station, COUNT(station) AS observations FROM measurement \
     GROUP BY station ORDER BY observations DESC LIMIT 1";
const STATS_FROM_SQL: &str = "SELECT CAST(MIN(tobs) AS REAL), AVG(tobs), CAST(MAX(tobs) AS REAL) \
     FROM measurement WHERE date >= ?";
const STATS_BETWEEN_SQL: &str =
    "SELECT CAST(MIN(tobs) AS REAL), AVG(tobs), CAST(MAX(tobs) AS REAL) \
     FROM measurement WHERE date >= ? AND date <= ?";

/// Real climate store backed by an sqlx SQLite pool
#[derive(Clone, Debug)]
pub struct SqliteClimateStore {
    pool: SqlitePool,
}

impl SqliteClimateStore {
    /// Open the database read-only behind a pool of at most `max_connections`
    pub async fn connect(database_url: &str, max_connections: u32) -> WebServerResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        debug!(
            "Opened climate database {} (max {} connections)",
            database_url, max_connections
        );
        Ok(Self { pool })
    }

    /// Close the pool, waiting for checked-out connections to come back
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn latest_date(
        conn: &mut SqliteConnection,
        station: Option<&str>,
    ) -> WebServerResult<Option<String>> {
        let latest = match station {
            Some(station) => {
                sqlx::query_scalar::<_, Option<String>>(LATEST_STATION_DATE_SQL)
                    .bind(station)
                    .fetch_one(&mut *conn)
                    .await?
            }
            None => {
                sqlx::query_scalar::<_, Option<String>>(LATEST_DATE_SQL)
                    .fetch_one(&mut *conn)
                    .await?
            }
        };
        Ok(latest)
    }
}

#[async_trait]
impl ClimateStore for SqliteClimateStore {
    async fn precipitation_last_year(&self) -> WebServerResult<PrecipitationByDate> {
        let mut conn = self.pool.acquire().await?;

        let Some(latest) = Self::latest_date(&mut conn, None).await? else {
            return Ok(PrecipitationByDate::new());
        };
        let cutoff = cutoff_for_stored(&latest)?;

        let rows: Vec<Measurement> = sqlx::query_as(MEASUREMENTS_SINCE_SQL)
            .bind(&cutoff)
            .fetch_all(&mut *conn)
            .await?;
        debug!("{} measurements since {} (latest {})", rows.len(), cutoff, latest);

        // Not grouped by station: a later row for the same date replaces an earlier one
        let mut by_date = PrecipitationByDate::new();
        for row in rows {
            by_date.insert(row.date, row.prcp);
        }
        Ok(by_date)
    }

    async fn station_ids(&self) -> WebServerResult<Vec<String>> {
        let mut conn = self.pool.acquire().await?;

        let stations: Vec<Station> = sqlx::query_as(STATIONS_SQL).fetch_all(&mut *conn).await?;
        Ok(stations.into_iter().map(|s| s.station).collect())
    }

    async fn most_active_temperatures(&self) -> WebServerResult<Vec<TemperatureObservation>> {
        let mut conn = self.pool.acquire().await?;

        let most_active: Option<(String, i64)> = sqlx::query_as(MOST_ACTIVE_SQL)
            .fetch_optional(&mut *conn)
            .await?;
        let Some((station, observations)) = most_active else {
            return Ok(Vec::new());
        };

        let Some(latest) = Self::latest_date(&mut conn, Some(&station)).await? else {
            return Ok(Vec::new());
        };
        let cutoff = cutoff_for_stored(&latest)?;
        debug!(
            "Most active station {} ({} observations), window {}..={}",
            station, observations, cutoff, latest
        );

        let rows: Vec<Measurement> = sqlx::query_as(STATION_MEASUREMENTS_SINCE_SQL)
            .bind(&station)
            .bind(&cutoff)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| TemperatureObservation {
                date: row.date,
                temperature: row.tobs,
            })
            .collect())
    }

    async fn temperature_stats(&self, range: DateRange) -> WebServerResult<TemperatureStats> {
        let mut conn = self.pool.acquire().await?;

        let sql = if range.end.is_some() {
            STATS_BETWEEN_SQL
        } else {
            STATS_FROM_SQL
        };
        let mut query = sqlx::query_as::<_, (Option<f64>, Option<f64>, Option<f64>)>(sql)
            .bind(range.start.to_string());
        if let Some(end) = range.end {
            query = query.bind(end.to_string());
        }

        // An empty window (including end before start) aggregates to NULLs
        let (min, avg, max) = query.fetch_one(&mut *conn).await?;
        Ok(TemperatureStats { min, avg, max })
    }
}
