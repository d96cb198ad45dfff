//! Webserver library for the climate observation API
//!
//! Serves trailing-year precipitation, the station list, temperature
//! observations of the most-active station, and temperature statistics over
//! date ranges from a read-only SQLite database.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::ClimateStore;

// Re-export service implementations
pub use services::SqliteClimateStore;
