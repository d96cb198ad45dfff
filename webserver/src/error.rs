//! WebServer-specific error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shared::{SharedError, logging};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Stored date '{value}' is not a valid YYYY-MM-DD date")]
    CorruptDate { value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status this error maps to when it escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(SharedError::InvalidDate { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            logging::log_error("webserver", "Request", &self);
            let body = Json(json!({ "error": "internal server error" }));
            return (status, body).into_response();
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
