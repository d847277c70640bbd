//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and mappings
//! from `CoreError` and `RepositoryError` to HTTP status codes. Error bodies
//! use the same `message` key as the success envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hotel_core::{CoreError, RepositoryError};
use thiserror::Error;

use crate::dto::MessageBody;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input or unparseable body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) => msg,
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                msg
            }
        };

        (status, axum::Json(MessageBody { message })).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Handlers answer missing hotels with a 200 envelope before this point
            RepositoryError::NotFound(msg) => Self::Internal(format!("Not found: {msg}")),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}
