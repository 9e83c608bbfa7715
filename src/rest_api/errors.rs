//! # REST API Errors
//!
//! Two failure classes reach HTTP callers:
//!
//! - validation: 400, static message, never echoes the request
//! - persistence: 500, static message per endpoint; the driver error is
//!   logged server-side only

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::observability::Event;
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Message for bodies that are not a JSON object
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object.";

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required field is absent, null or empty
    #[error("{0}")]
    MissingFields(&'static str),

    /// Body could not be decoded
    #[error("{}", INVALID_BODY_MESSAGE)]
    InvalidBody,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Statement failed; `message` is what the caller sees
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RestError {
    /// Persistence failure with a caller-facing message
    pub fn persistence(message: &'static str, source: StoreError) -> Self {
        RestError::Persistence { message, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::MissingFields(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody => StatusCode::BAD_REQUEST,
            RestError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(
            event = %Event::RequestRejected,
            status = rejection.status().as_u16(),
            "request body could not be decoded"
        );
        RestError::InvalidBody
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match &self {
            RestError::Persistence { message, source } => {
                error!(event = %Event::QueryFailed, error = %source, "{}", message);
            }
            RestError::MissingFields(message) => {
                warn!(event = %Event::RequestRejected, "{}", message);
            }
            RestError::InvalidBody => {}
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::MissingFields("Name and email are required fields.").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RestError::persistence(
                "Failed to add user to the database.",
                StoreError::Unavailable("down".to_string())
            )
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_persistence_body_hides_driver_error() {
        let err = RestError::persistence(
            "Failed to retrieve users.",
            StoreError::Unavailable("secret host 10.0.0.7 refused".to_string()),
        );

        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "Failed to retrieve users.");
        assert_eq!(body.code, 500);
        assert!(!body.error.contains("10.0.0.7"));
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse::from(&RestError::MissingFields("Name and email are required fields."));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Name and email are required fields.");
        assert_eq!(json["code"], 400);
    }
}
