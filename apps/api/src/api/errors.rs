use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::admission::AdmissionRejection;
use crate::services::ServiceError;

/// API error type with HTTP status code and message
///
/// Admission rejections also carry a machine-readable `code`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub code: Option<&'static str>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.code {
            Some(code) => json!({ "error": self.message, "code": code }),
            None => json!({ "error": self.message }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<AdmissionRejection> for ApiError {
    fn from(rejection: AdmissionRejection) -> Self {
        let status = match rejection {
            AdmissionRejection::NotAuthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        };

        Self {
            status,
            message: rejection.to_string(),
            code: Some(rejection.code()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Rejected(rejection) => rejection.into(),
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Forbidden(msg) => Self::forbidden(msg),
            ServiceError::Conflict(msg) => Self::conflict(msg),
            ServiceError::Repository(e) => {
                tracing::error!(error = %e, "Repository failure");
                Self::internal_server_error("Internal server error")
            }
        }
    }
}
