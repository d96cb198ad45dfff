//! Test helpers: temporary SQLite databases and HTTP plumbing

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use climate_webserver::{Measurement, SqliteClimateStore, Station, WebServer};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use tempfile::TempDir;
use tower::ServiceExt;

use super::fixtures::TestFixtures;

const CREATE_STATION_SQL: &str = "CREATE TABLE station (
    id INTEGER PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)";

const CREATE_MEASUREMENT_SQL: &str = "CREATE TABLE measurement (
    id INTEGER PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

const INSERT_STATION_SQL: &str =
    "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)";

const INSERT_MEASUREMENT_SQL: &str =
    "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)";

/// A seeded SQLite file that lives as long as this value
pub struct TestDatabase {
    _dir: TempDir,
    pub url: String,
}

impl TestDatabase {
    /// Create a database holding the given rows, inserted in order
    pub async fn seeded(stations: &[Station], measurements: &[Measurement]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        let url = format!("sqlite://{}", path.display());

        let mut conn = SqliteConnectOptions::from_str(&url)
            .unwrap()
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();

        sqlx::query(CREATE_STATION_SQL).execute(&mut conn).await.unwrap();
        sqlx::query(CREATE_MEASUREMENT_SQL).execute(&mut conn).await.unwrap();

        for s in stations {
            sqlx::query(INSERT_STATION_SQL)
                .bind(&s.station)
                .bind(&s.name)
                .bind(s.latitude)
                .bind(s.longitude)
                .bind(s.elevation)
                .execute(&mut conn)
                .await
                .unwrap();
        }
        for m in measurements {
            sqlx::query(INSERT_MEASUREMENT_SQL)
                .bind(&m.station)
                .bind(&m.date)
                .bind(m.prcp)
                .bind(m.tobs)
                .execute(&mut conn)
                .await
                .unwrap();
        }

        conn.close().await.unwrap();
        Self { _dir: dir, url }
    }

    /// Database seeded with the standard fixtures
    pub async fn standard() -> Self {
        Self::seeded(&TestFixtures::stations(), &TestFixtures::measurements()).await
    }

    /// Database with both tables present but no rows
    pub async fn empty() -> Self {
        Self::seeded(&[], &[]).await
    }

    pub async fn store(&self) -> SqliteClimateStore {
        SqliteClimateStore::connect(&self.url, 2).await.unwrap()
    }

    pub async fn router(&self) -> Router {
        let bind_addr = "127.0.0.1:5000".parse().unwrap();
        WebServer::new(bind_addr, self.store().await).build_router()
    }
}

/// Issue a GET and return status plus raw body
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Issue a GET and parse the body as JSON
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}
