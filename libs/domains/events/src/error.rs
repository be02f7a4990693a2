//! Event domain error types

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use remote_api::ApiError;
use thiserror::Error;

/// Event domain errors
#[derive(Debug, Error)]
pub enum EventError {
    /// No event stored under this ID
    #[error("Event with ID {0} not found")]
    NotFound(i32),

    /// DTO rejected before any remote call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Remote API refused the write or answered with something unreadable
    #[error(transparent)]
    Remote(#[from] ApiError),
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event with ID {} not found", id)),
            EventError::Validation(msg) => AppError::Validation(msg),
            EventError::Remote(ApiError::Decode(msg)) => AppError::UpstreamDecode(msg),
            EventError::Remote(e) => AppError::BadGateway(e.to_string()),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
