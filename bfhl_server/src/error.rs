use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::ErrorResponse;

pub const INVALID_DATA_MESSAGE: &str = "Invalid input. 'data' must be an array.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    /// Details are logged, never returned to the client.
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub fn invalid_data() -> Self {
        Self::InvalidInput(INVALID_DATA_MESSAGE.to_string())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InvalidInput(message) => {
                warn!("Rejected request: {message}");
                message.clone()
            }
            Self::Internal(source) => {
                error!("Error processing request: {source:#}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (self.status(), Json(ErrorResponse::new(message))).into_response()
    }
}

/// Turn a handler panic into the generic internal-error envelope.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    ApiError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::invalid_data().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_display_hides_source() {
        let err = ApiError::Internal(anyhow::anyhow!("database password is hunter2"));
        assert_eq!(err.to_string(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn panic_payloads_become_500() {
        let response = handle_panic(Box::new("kaboom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("kaboom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
