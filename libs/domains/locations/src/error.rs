use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use remote_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location with ID {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Remote(#[from] ApiError),
}

pub type LocationResult<T> = Result<T, LocationError>;

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::NotFound(id) => {
                AppError::NotFound(format!("Location with ID {} not found", id))
            }
            LocationError::Validation(msg) => AppError::Validation(msg),
            LocationError::Remote(ApiError::Decode(msg)) => AppError::UpstreamDecode(msg),
            LocationError::Remote(e) => AppError::BadGateway(e.to_string()),
        }
    }
}

impl IntoResponse for LocationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
