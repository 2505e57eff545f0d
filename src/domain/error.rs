use thiserror::Error;

/// Maximum number of bytes of an upstream error body carried in an error.
///
/// Upstream bodies are truncated at capture time and are never logged raw,
/// since they may echo request headers.
pub const MAX_UPSTREAM_BODY_LEN: usize = 512;

/// Core classification errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifyError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Provider timeout: {provider} did not respond within the deadline")]
    ProviderTimeout { provider: String },

    #[error("Provider error: {provider} returned HTTP {status}: {body}")]
    ProviderError {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Bad provider response: {provider} - {message}")]
    ProviderBadResponse { provider: String, message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClassifyError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn provider_timeout(provider: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
        }
    }

    /// Upstream rejected or errored. The body is truncated to
    /// [`MAX_UPSTREAM_BODY_LEN`] bytes.
    pub fn provider_error(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_UPSTREAM_BODY_LEN {
            let mut cut = MAX_UPSTREAM_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }

        Self::ProviderError {
            provider: provider.into(),
            status,
            body,
        }
    }

    /// Upstream returned something we cannot understand, as opposed to an
    /// explicit rejection.
    pub fn provider_bad_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderBadResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let error = ClassifyError::invalid_input("text must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid input: text must not be empty"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = ClassifyError::provider_error("huggingface", 503, "overloaded");
        assert_eq!(
            error.to_string(),
            "Provider error: huggingface returned HTTP 503: overloaded"
        );
    }

    #[test]
    fn test_provider_error_truncates_body() {
        let body = "x".repeat(MAX_UPSTREAM_BODY_LEN * 2);
        let error = ClassifyError::provider_error("huggingface", 500, body);

        match error {
            ClassifyError::ProviderError { body, .. } => {
                assert_eq!(body.len(), MAX_UPSTREAM_BODY_LEN);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_provider_error_truncation_respects_char_boundaries() {
        let body = "é".repeat(MAX_UPSTREAM_BODY_LEN);
        let error = ClassifyError::provider_error("huggingface", 500, body);

        match error {
            ClassifyError::ProviderError { body, .. } => {
                assert!(body.len() <= MAX_UPSTREAM_BODY_LEN);
                assert!(body.chars().all(|c| c == 'é'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_timeout_error() {
        let error = ClassifyError::provider_timeout("huggingface");
        assert_eq!(
            error.to_string(),
            "Provider timeout: huggingface did not respond within the deadline"
        );
    }
}
