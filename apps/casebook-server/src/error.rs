//! Error types for the casebook server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use casebook_core::CaseError;
use serde::Serialize;
use thiserror::Error;

/// Body of the plain-text 404 for unknown articles
pub const NOT_FOUND_BODY: &str = "Article not found";

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::Case(CaseError::NotFound(id)) => {
                tracing::debug!("Article {} not found", id);
                return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
            }
            ServerError::Case(CaseError::MalformedSubmission { .. }) => {
                tracing::warn!("Rejected submission: {}", self);
                (StatusCode::BAD_REQUEST, "MALFORMED_SUBMISSION", self.to_string())
            }
            ServerError::Case(CaseError::CorruptData { .. }) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CORRUPT_DATA",
                    "Stored article data is corrupt".to_string(),
                )
            }
            ServerError::Case(e) => {
                tracing::error!("Store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal error".to_string(),
                )
            }
            ServerError::Task(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
