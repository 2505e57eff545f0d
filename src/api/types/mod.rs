//! API request/response types

pub mod classify;
pub mod error;
pub mod json;

pub use classify::{ClassifyMeta, ClassifyRequest, ClassifyResponse};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
