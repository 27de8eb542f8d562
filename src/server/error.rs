//! HTTP error mapping
//!
//! Uniform JSON error body: `{error, error_code}`. The detailed cause
//! is logged server-side; callers get a generic message. No partial or
//! degraded answers are synthesized on error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AssistantError;

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub error_code: String,
}

/// Error as seen by the HTTP layer
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    /// Full cause, logged but never sent to the caller
    detail: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: StatusCode::NOT_FOUND,
            code: "RESOURCE_NOT_FOUND",
            detail: message.clone(),
            message,
        }
    }

    pub fn internal(detail: impl ToString) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "SYSTEM_INTERNAL_ERROR",
            message: "Internal server error".to_string(),
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        match &err {
            AssistantError::RecordNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                code: "RESOURCE_NOT_FOUND",
                message: err.to_string(),
                detail: err.to_string(),
            },
            AssistantError::Retrieval(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "RETRIEVAL_FAILED",
                message: "Failed to retrieve supporting FAQ context".to_string(),
                detail: err.to_string(),
            },
            AssistantError::Generation(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "GENERATION_FAILED",
                message: "Failed to generate an answer".to_string(),
                detail: err.to_string(),
            },
            _ => Self::internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, detail = %self.detail, "request failed");
        } else {
            tracing::debug!(code = self.code, detail = %self.detail, "request rejected");
        }

        let body = ErrorBody {
            error: self.message,
            error_code: self.code.to_string(),
        };

        (self.status, Json(body)).into_response()
    }
}
