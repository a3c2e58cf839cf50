//! Error handling for the facility simulator.

use crate::web::response::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

/// A specialized `Result` type for facility simulator operations.
pub type Result<T> = std::result::Result<T, FacilityError>;

/// The main error type for the facility simulator.
#[derive(Debug, thiserror::Error)]
pub enum FacilityError {
    /// No facility with the requested id exists in the store
    #[error("Facility not found: {0}")]
    NotFound(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FacilityError {
    /// Create a new not-found error for the given facility id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FacilityError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            FacilityError::NotFound(id) => {
                warn!(facility_id = %id, "facility not found");
                "Facility not found"
            }
            other => {
                error!(error = %other, "request failed");
                "Internal server error"
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
