use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

use parlor_store::StoreError;

/// Errors a handler can answer with. Bodies are plain text, the same
/// sentence the store produced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Path id that is not a number; it can never match an identity.
    #[error("Nickname id {0} not found.")]
    UnknownId(String),

    #[error("{0}")]
    Body(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::UnknownId(_) => StatusCode::NOT_FOUND,
            Self::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("Request refused ({}): {}", status, self);
        (status, self.to_string()).into_response()
    }
}
