//! Mapping from assessment errors to HTTP responses

use agent_exposure_common::ExposureError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{error, warn};

use crate::types::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Exposure(ExposureError),
    /// The session store lock was poisoned by a panicking handler
    StorageLock,
}

impl From<ExposureError> for ApiError {
    fn from(err: ExposureError) -> Self {
        Self::Exposure(err)
    }
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Exposure(err) => match err {
                ExposureError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                ExposureError::InvalidTransition { .. } => {
                    (StatusCode::CONFLICT, "INVALID_TRANSITION")
                }
                ExposureError::IncompleteProfile { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "INCOMPLETE_PROFILE")
                }
                ExposureError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
                ExposureError::SessionLimit { .. } => {
                    (StatusCode::SERVICE_UNAVAILABLE, "SESSION_LIMIT")
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            },
            ApiError::StorageLock => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_LOCK_ERROR"),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Exposure(err) => err.to_string(),
            ApiError::StorageLock => "Failed to access session storage".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.message();

        if status.is_server_error() {
            error!(status = %status, code, error = %message, "Request failed");
        } else {
            warn!(status = %status, code, error = %message, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: Some(code.to_string()),
                timestamp: Utc::now(),
            }),
        )
            .into_response()
    }
}
