//! HTTP client abstraction for remote classification backends

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

/// Transport-level failure of a single outbound call.
///
/// Kept separate from [`crate::domain::ClassifyError`] so each provider can
/// attach its own identifier when translating (a timeout against the
/// Hugging Face API should read as a Hugging Face timeout, not a generic
/// HTTP one).
#[derive(Debug, Clone)]
pub enum HttpCallError {
    /// The call exceeded the client's configured deadline
    Timeout,
    /// Upstream answered with a non-2xx status
    Status { status: u16, body: String },
    /// The connection itself failed
    Transport(String),
    /// Upstream answered 2xx but the body was not valid JSON
    Decode(String),
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpCallError>;
}

/// Real HTTP client using reqwest
///
/// The timeout covers the whole call, connect through body; a call that
/// exceeds it is aborted and no background work continues.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpCallError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpCallError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpCallError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request.json(body).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpCallError::Timeout
            } else {
                HttpCallError::Transport(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpCallError::Timeout
            } else {
                HttpCallError::Transport(format!("Failed to read response body: {}", e))
            }
        })?;

        if !status.is_success() {
            return Err(HttpCallError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| HttpCallError::Decode(format!("Response is not valid JSON: {}", e)))
    }
}
