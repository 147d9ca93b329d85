//! ApiError - Maps store failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::VehicleError;

/// Failure of a single HTTP request.
#[derive(Debug)]
pub enum ApiError {
    /// A path, query or body value could not be decoded.
    BadRequest(String),
    /// The store rejected the operation.
    Store(VehicleError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(VehicleError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(VehicleError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Store(VehicleError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(VehicleError::NoMatch) => StatusCode::NOT_FOUND,
            ApiError::Store(VehicleError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Store(err) => err.to_string(),
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
