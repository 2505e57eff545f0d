//! User-visible error envelope and boundary mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::ClassifyError;

/// Error categories exposed to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    UpstreamTimeoutError,
    UpstreamError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::UpstreamTimeoutError => write!(f, "upstream_timeout_error"),
            Self::UpstreamError => write!(f, "upstream_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// JSON error response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Upstream did not answer in time; the caller may retry
    pub fn upstream_timeout(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::GATEWAY_TIMEOUT,
            ApiErrorType::UpstreamTimeoutError,
            message,
        )
    }

    /// Upstream rejected, errored, or answered nonsense
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, ApiErrorType::UpstreamError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        match &err {
            ClassifyError::InvalidInput { message } => {
                Self::bad_request(message).with_param("text")
            }
            ClassifyError::ProviderTimeout { .. } => Self::upstream_timeout(err.to_string()),
            ClassifyError::ProviderError { .. } => {
                Self::bad_gateway(err.to_string()).with_code("upstream_rejected")
            }
            ClassifyError::ProviderBadResponse { .. } => {
                Self::bad_gateway(err.to_string()).with_code("bad_upstream_response")
            }
            ClassifyError::Cache { message } => Self::internal(message),
            ClassifyError::Configuration { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let api_err: ApiError = ClassifyError::invalid_input("empty text").into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_err.response.error.error_type,
            ApiErrorType::InvalidRequestError
        );
        assert_eq!(api_err.response.error.param.as_deref(), Some("text"));
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let api_err: ApiError = ClassifyError::provider_timeout("huggingface").into();
        assert_eq!(api_err.status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_upstream_rejection_and_bad_response_are_distinguishable() {
        let rejected: ApiError = ClassifyError::provider_error("huggingface", 500, "boom").into();
        let garbled: ApiError =
            ClassifyError::provider_bad_response("huggingface", "not a list").into();

        assert_eq!(rejected.status, StatusCode::BAD_GATEWAY);
        assert_eq!(garbled.status, StatusCode::BAD_GATEWAY);
        assert_ne!(rejected.response.error.code, garbled.response.error.code);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::bad_request("text must not be empty").with_param("text");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("invalid_request_error"));
        assert!(json.contains("text must not be empty"));
    }
}
