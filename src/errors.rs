// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure in the request pipeline maps to one of these
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            PlacesError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            PlacesError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PlacesError::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
            PlacesError::UpstreamError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR")
            }
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlacesError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacesError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            PlacesError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            PlacesError::InvalidInput("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PlacesError::NotFound("missing".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PlacesError::UpstreamTimeout("slow".to_string()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            PlacesError::UpstreamError("broken".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
