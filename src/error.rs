//! Error types and error handling for the relay
//!
//! This module defines the relay's error taxonomy and converts each error
//! into the HTTP response the API contract promises. All errors implement
//! `IntoResponse`, so the boundary conversion happens in exactly one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant's display text is the exact client-facing message; the
/// `IntoResponse` impl pairs it with the matching HTTP status. Nothing
/// beyond these fixed strings ever reaches the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request omitted `message` or `apiKey`, or sent one of them empty
    #[error("Message and API key are required")]
    InvalidRequest,

    /// Upstream returned a non-success status, which is forwarded verbatim
    #[error("Failed to get response from Gemini API")]
    UpstreamStatus {
        /// HTTP status code reported by the upstream API
        status: u16,
    },

    /// Upstream body decoded but lacked `candidates[0].content`
    #[error("Invalid response format from Gemini API")]
    InvalidResponseFormat,

    /// Upstream body had the expected shape but carried no text payload
    #[error("No response text from Gemini API")]
    NoResponseText,

    /// Internal server error (catch-all for unexpected errors)
    ///
    /// The wrapped error is logged at the boundary; the response body only
    /// ever contains the fixed message.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            // Forward the upstream status; fall back to 500 if it is not a
            // representable HTTP code.
            AppError::UpstreamStatus { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::InvalidResponseFormat => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NoResponseText => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(source) => {
                tracing::error!(error = %source, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
