//! Application error type and its HTTP rendering.
//!
//! Callers only ever see a fixed set of plain-text bodies. Internal error
//! detail is logged where the error is raised and never rendered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::repositories::StoreError;

/// Body returned with every 404.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Body returned with every 500.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    /// The caller sent a missing or malformed URL or identifier.
    #[error("{message}")]
    Validation { message: String },
    /// No mapping exists for the requested identifier.
    #[error("not found")]
    NotFound,
    /// The store failed or timed out. `message` is for logs only.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status the error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation { message } => format!("Bad Request: {message}"),
            AppError::NotFound => NOT_FOUND_BODY.to_string(),
            AppError::Internal { .. } => INTERNAL_ERROR_BODY.to_string(),
        };

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}
