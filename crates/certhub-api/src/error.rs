//! Maps identity-core and application errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use certhub_auth::AuthError;
use certhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-mapped error returned by every handler.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status.
    pub status: StatusCode,
    /// Machine-readable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Create an error with the given status and code.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Create a 400 validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
    }

    /// Create a 401 unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "Request failed");
        }

        let body = ApiErrorResponse {
            error: self.code.to_string(),
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::InvalidSignature(_) => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_SIGNATURE", message)
            }
            AuthError::CodeNotFound => {
                Self::new(StatusCode::UNAUTHORIZED, "CODE_NOT_FOUND", message)
            }
            AuthError::CodeMismatch => {
                Self::new(StatusCode::UNAUTHORIZED, "CODE_MISMATCH", message)
            }
            AuthError::SessionExpired => {
                Self::new(StatusCode::UNAUTHORIZED, "SESSION_EXPIRED", message)
            }
            AuthError::SessionMismatch => {
                Self::new(StatusCode::UNAUTHORIZED, "SESSION_MISMATCH", message)
            }
            AuthError::AccountMismatch => {
                Self::new(StatusCode::FORBIDDEN, "ACCOUNT_MISMATCH", message)
            }
            AuthError::OrganizationMismatch => {
                Self::new(StatusCode::FORBIDDEN, "ORGANIZATION_MISMATCH", message)
            }
            AuthError::AccountNotFound => {
                Self::new(StatusCode::UNAUTHORIZED, "ACCOUNT_NOT_FOUND", message)
            }
            AuthError::Forbidden(_) => Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", message),
            AuthError::TokenEncoding(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ENCODING",
                message,
            ),
            AuthError::Unauthorized(_) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
            }
            AuthError::App(inner) => Self::from(inner),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let message = err.message.clone();
        match err.kind {
            ErrorKind::NotFound => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ErrorKind::Validation => Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),
            ErrorKind::Conflict => Self::new(StatusCode::CONFLICT, "CONFLICT", message),
            ErrorKind::Timeout => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_TIMEOUT",
                message,
            ),
            ErrorKind::ExternalService => {
                Self::new(StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE", message)
            }
            ErrorKind::Store
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
            ),
        }
    }
}
