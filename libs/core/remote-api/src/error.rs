use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to remote API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Remote API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("{0}")]
    Decode(String),

    #[error("Invalid remote API URL: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status reported by the remote API, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status(),
            _ => None,
        }
    }
}
