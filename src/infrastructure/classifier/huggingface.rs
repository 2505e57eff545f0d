//! Hugging Face inference API provider

use async_trait::async_trait;

use super::http_client::{HttpCallError, HttpClientTrait};
use crate::domain::classification::{validate_input, Classification, LabelScore};
use crate::domain::{ClassifyError, TextClassifier};

const PROVIDER_NAME: &str = "huggingface";

/// Default inference endpoint (SST-2 sentiment model)
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

/// Remote classifier calling the Hugging Face inference API.
///
/// Performs exactly one outbound POST per call - retry policy, if any,
/// belongs to the caller. The configured timeout is enforced by the HTTP
/// client; timeouts, upstream rejections, and malformed bodies are
/// translated into the matching `ClassifyError` variants so callers can
/// tell "upstream said no" from "upstream said something we can't
/// understand".
#[derive(Debug)]
pub struct HuggingFaceClassifier<C: HttpClientTrait> {
    client: C,
    endpoint_url: String,
    /// Pre-built `Bearer <token>` header value, absent when unauthenticated
    auth_header: Option<String>,
}

impl<C: HttpClientTrait> HuggingFaceClassifier<C> {
    pub fn new(client: C, auth_token: Option<String>) -> Self {
        Self::with_endpoint(client, auth_token, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(
        client: C,
        auth_token: Option<String>,
        endpoint_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint_url: endpoint_url.into(),
            auth_header: auth_token
                .filter(|t| !t.is_empty())
                .map(|t| format!("Bearer {}", t)),
        }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];

        if let Some(value) = &self.auth_header {
            headers.push(("Authorization", value.as_str()));
        }

        headers
    }

    fn translate(error: HttpCallError) -> ClassifyError {
        match error {
            HttpCallError::Timeout => ClassifyError::provider_timeout(PROVIDER_NAME),
            HttpCallError::Status { status, body } => {
                ClassifyError::provider_error(PROVIDER_NAME, status, body)
            }
            HttpCallError::Transport(message) => {
                ClassifyError::provider_error(PROVIDER_NAME, 0, message)
            }
            HttpCallError::Decode(message) => {
                ClassifyError::provider_bad_response(PROVIDER_NAME, message)
            }
        }
    }
}

/// Normalizes the provider-native response shape.
///
/// The inference API returns a list of `{label, score}` objects, nested one
/// level for single-input requests: `[[{"label": "POSITIVE", "score": 0.99},
/// ...]]`. Anything else is a backend contract violation.
fn normalize(raw: serde_json::Value) -> Result<Classification, ClassifyError> {
    let bad = |message: String| ClassifyError::provider_bad_response(PROVIDER_NAME, message);

    let items = match raw {
        serde_json::Value::Array(outer) => {
            // Single-input requests come back wrapped in one extra list
            match outer.first() {
                Some(serde_json::Value::Array(_)) => match outer.into_iter().next() {
                    Some(serde_json::Value::Array(inner)) => inner,
                    _ => unreachable!(),
                },
                _ => outer,
            }
        }
        other => {
            return Err(bad(format!(
                "expected a list of label/score objects, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut labels = Vec::with_capacity(items.len());
    for item in items {
        let entry: RawLabel = serde_json::from_value(item)
            .map_err(|e| bad(format!("malformed label entry: {}", e)))?;
        labels.push(LabelScore::new(entry.label, entry.score));
    }

    let result = Classification::new(PROVIDER_NAME, labels);
    result.validate().map_err(bad)?;

    Ok(result)
}

#[derive(serde::Deserialize)]
struct RawLabel {
    label: String,
    score: f64,
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl<C: HttpClientTrait> TextClassifier for HuggingFaceClassifier<C> {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let trimmed = validate_input(text)?;
        let body = serde_json::json!({ "inputs": trimmed });

        let raw = self
            .client
            .post_json(&self.endpoint_url, self.headers(), &body)
            .await
            .map_err(Self::translate)?;

        normalize(raw)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
