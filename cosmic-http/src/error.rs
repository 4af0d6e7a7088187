use axum::response::{IntoResponse, Response};
use cosmic_core::CosmicError;
use http::StatusCode;

/// Request failure rendered as a plain-text response.
#[derive(Debug)]
pub enum ApiError {
    Core(CosmicError),
    Internal(String),
}

impl From<CosmicError> for ApiError {
    fn from(e: CosmicError) -> Self {
        ApiError::Core(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CosmicError::MissingParameter(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(CosmicError::UnsafeSegment(_)) => StatusCode::FORBIDDEN,
            ApiError::Core(CosmicError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "Missing subject or file parameter",
            StatusCode::FORBIDDEN => "Invalid path parameters",
            StatusCode::NOT_FOUND => "File not found",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Core(e) if status.is_client_error() => {
                tracing::warn!(%status, error = %e, "request rejected");
            }
            ApiError::Core(e) => tracing::error!(error = %e, "request failed"),
            ApiError::Internal(msg) => tracing::error!(error = %msg, "request failed"),
        }
        (status, self.body()).into_response()
    }
}
