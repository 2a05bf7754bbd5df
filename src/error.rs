// src/error.rs
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

/// Errors a handler reports to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            success: false,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Failures of the external text-generation call. `/chat` never reports these;
/// they select the offline reply instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation service returned no text")]
    EmptyResponse,

    #[error("generation task failed: {0}")]
    TaskFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validation_maps_to_bad_request() {
        let response = AppError::Validation("Message is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Message is required");
    }

    #[tokio::test]
    async fn internal_maps_to_server_error() {
        let response = AppError::Internal("Error generating risk assessment".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_message_reads_like_a_timeout() {
        let err = GenerationError::Timeout(Duration::from_secs(30));
        assert!(err.to_string().starts_with("Request timeout"));
    }
}
