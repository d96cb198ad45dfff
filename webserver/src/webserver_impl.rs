//! Main webserver implementation
//!
//! The WebServer struct owns the injected store and builds the axum router
//! that maps each endpoint onto one store query.

use axum::{
    Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use shared::{
    DateRange, PrecipitationByDate, QueryDate, TemperatureObservation, TemperatureStats, logging,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::ClimateStore;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Main webserver struct with dependency injection
pub struct WebServer<S>
where
    S: ClimateStore,
{
    state: Arc<WebServerState>,
    store: Arc<S>,
}

impl<S> Clone for WebServer<S>
where
    S: ClimateStore,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            store: self.store.clone(),
        }
    }
}

impl<S> WebServer<S>
where
    S: ClimateStore + 'static,
{
    /// Create a new webserver around a store
    pub fn new(bind_address: SocketAddr, store: S) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address)),
            store: Arc::new(store),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(serve_index))
            .route("/health", get(health_check::<S>))
            // Static segments take priority over the date captures below
            .route("/api/v1.0/precipitation", get(precipitation_handler::<S>))
            .route("/api/v1.0/stations", get(stations_handler::<S>))
            .route("/api/v1.0/tobs", get(tobs_handler::<S>))
            .route("/api/v1.0/:start", get(stats_from_handler::<S>))
            .route("/api/v1.0/:start/:end", get(stats_range_handler::<S>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let bind_address = self.state.bind_address;
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e))
            })?;

        logging::log_success("webserver", &format!("🌐 Listening on http://{}", bind_address));

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("webserver", "Received Ctrl+C signal"),
        Err(err) => logging::log_error("webserver", "Signal handling", &err),
    }
}

// HTTP Handlers

/// Serve the welcome page listing the API routes
async fn serve_index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health_check<S>(State(webserver): State<WebServer<S>>) -> Json<serde_json::Value>
where
    S: ClimateStore + 'static,
{
    Json(json!({
        "status": "healthy",
        "uptime": webserver.state.get_uptime_seconds(),
    }))
}

async fn precipitation_handler<S>(
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<PrecipitationByDate>>
where
    S: ClimateStore + 'static,
{
    let by_date = webserver.store.precipitation_last_year().await?;
    debug!("precipitation: {} dates", by_date.len());
    Ok(Json(by_date))
}

async fn stations_handler<S>(
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<Vec<String>>>
where
    S: ClimateStore + 'static,
{
    let stations = webserver.store.station_ids().await?;
    debug!("stations: {} ids", stations.len());
    Ok(Json(stations))
}

async fn tobs_handler<S>(
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<Vec<TemperatureObservation>>>
where
    S: ClimateStore + 'static,
{
    let observations = webserver.store.most_active_temperatures().await?;
    debug!("tobs: {} observations", observations.len());
    Ok(Json(observations))
}

async fn stats_from_handler<S>(
    Path(start): Path<String>,
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<TemperatureStats>>
where
    S: ClimateStore + 'static,
{
    let range = DateRange::starting(start.parse::<QueryDate>()?);
    let stats = webserver.store.temperature_stats(range).await?;
    debug!("stats from {}: {:?}", range.start, stats);
    Ok(Json(stats))
}

async fn stats_range_handler<S>(
    Path((start, end)): Path<(String, String)>,
    State(webserver): State<WebServer<S>>,
) -> WebServerResult<Json<TemperatureStats>>
where
    S: ClimateStore + 'static,
{
    let range = DateRange::between(start.parse::<QueryDate>()?, end.parse::<QueryDate>()?);
    let stats = webserver.store.temperature_stats(range).await?;
    debug!("stats {}..={}: {:?}", range.start, end, stats);
    Ok(Json(stats))
}
