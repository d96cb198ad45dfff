//! Command line and environment configuration

use clap::Parser;
use shared::SharedError;
use std::net::SocketAddr;

use crate::error::{WebServerError, WebServerResult};

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug, Clone)]
#[command(name = "climate-webserver")]
#[command(about = "Read-only HTTP API over a climate observation database")]
pub struct Args {
    /// SQLite connection string for the station/measurement database
    #[arg(long, env = "CLIMATE_DATABASE_URL", default_value = "sqlite://Resources/hawaii.sqlite")]
    pub database_url: String,

    /// Interface to bind the HTTP server to
    #[arg(long, env = "CLIMATE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP server
    #[arg(long, env = "CLIMATE_PORT", default_value = "5000")]
    pub port: u16,

    /// Upper bound on pooled database connections
    #[arg(long, env = "CLIMATE_MAX_CONNECTIONS", default_value = "5")]
    pub max_connections: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CLIMATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Validated server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub max_connections: u32,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> WebServerResult<Self> {
        let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
            .parse()
            .map_err(|e| {
                WebServerError::config(format!(
                    "Invalid bind address {}:{}: {}",
                    args.host, args.port, e
                ))
            })?;

        if args.max_connections == 0 {
            return Err(SharedError::InvalidConfig {
                field: "max_connections".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if args.database_url.trim().is_empty() {
            return Err(WebServerError::config("Database URL must not be empty"));
        }

        Ok(Self {
            database_url: args.database_url,
            bind_address,
            max_connections: args.max_connections,
            log_level: args.log_level,
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }
}
