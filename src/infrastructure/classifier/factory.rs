//! Classifier factory for runtime provider selection

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::http_client::HttpClient;
use super::huggingface::{HuggingFaceClassifier, DEFAULT_ENDPOINT};
use super::mock::MockClassifier;
use crate::domain::{ClassifyError, TextClassifier};

/// Supported provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deterministic offline classifier
    #[default]
    Mock,
    /// Hugging Face inference API
    Remote,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Mock => write!(f, "mock"),
            ProviderKind::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "remote" | "hf" | "huggingface" => Ok(ProviderKind::Remote),
            _ => Err(ClassifyError::configuration(format!(
                "Unknown provider kind: {}. Valid kinds: mock, remote",
                s
            ))),
        }
    }
}

/// Classification backend configuration.
///
/// Constructed once at startup from external configuration and immutable
/// thereafter; requests never mutate it.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Remote endpoint; falls back to the default SST-2 model URL
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Hard deadline for a single outbound call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    5
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            endpoint_url: None,
            auth_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ClassifierConfig {
    /// True when the remote backend is selected without a credential.
    /// Surfaced through the health endpoint as `degraded`.
    pub fn missing_credential(&self) -> bool {
        self.provider == ProviderKind::Remote
            && self.auth_token.as_deref().is_none_or(str::is_empty)
    }
}

/// Factory for creating classification providers
#[derive(Debug)]
pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Create a classifier from configuration
    pub fn create(config: &ClassifierConfig) -> Result<Arc<dyn TextClassifier>, ClassifyError> {
        match config.provider {
            ProviderKind::Mock => Ok(Arc::new(MockClassifier::new())),

            ProviderKind::Remote => {
                if config.timeout_seconds == 0 {
                    return Err(ClassifyError::configuration(
                        "timeout_seconds must be greater than zero",
                    ));
                }

                let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_seconds))
                    .map_err(|e| {
                        ClassifyError::configuration(format!("Failed to build HTTP client: {e:?}"))
                    })?;

                let endpoint = config
                    .endpoint_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

                Ok(Arc::new(HuggingFaceClassifier::with_endpoint(
                    client,
                    config.auth_token.clone(),
                    endpoint,
                )))
            }
        }
    }
}
