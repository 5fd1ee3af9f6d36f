//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to the `{"success": false, "error": ...}` responses the
//! web client expects.
//!
//! Recommendation-quality failures (dataset missing, scoring errors) are
//! NOT errors at this level: the service layer degrades to the rule-based
//! selector and the request still succeeds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitbuddy_shared::types::ApiErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ApiErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
