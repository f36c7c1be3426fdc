//! Unified error handling for the HTTP surface.
//!
//! Every variant renders as the standard envelope
//! `{ "success": false, "data": "<message>" }` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{MSG_USER_CREATION_FAILED, MSG_USER_NOT_FOUND};
use thiserror::Error;

use crate::response::ApiResponse;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Resource could not be created")]
    CreationFailed,

    #[error("Resource could not be deleted")]
    DeletionFailed,

    // Request the extractors could not accept, with the status they chose
    #[error("Request rejected ({0}): {1}")]
    Rejected(StatusCode, String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::DeletionFailed => StatusCode::NOT_FOUND,
            AppError::Rejected(status, _) => *status,
            AppError::CreationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound | AppError::DeletionFailed => MSG_USER_NOT_FOUND.to_string(),
            AppError::CreationFailed => MSG_USER_CREATION_FAILED.to_string(),
            AppError::Rejected(_, msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        }
        let body = ApiResponse::failure(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn rejected(status: StatusCode, msg: impl Into<String>) -> Self {
        AppError::Rejected(status, msg.into())
    }
}
