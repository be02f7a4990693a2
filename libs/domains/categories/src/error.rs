use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use remote_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category with ID {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Remote(#[from] ApiError),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Convert CategoryError to AppError for standardized error responses
impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(id) => {
                AppError::NotFound(format!("Category with ID {} not found", id))
            }
            CategoryError::Validation(msg) => AppError::Validation(msg),
            CategoryError::Remote(ApiError::Decode(msg)) => AppError::UpstreamDecode(msg),
            CategoryError::Remote(e) => AppError::BadGateway(e.to_string()),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
