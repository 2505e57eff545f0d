use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::classification::Classification;
use crate::domain::ClassifyError;

/// Trait for classification backends (mock, Hugging Face, etc.)
///
/// Implementations are polymorphic over this single capability; the
/// orchestrator is agnostic to which variant is active. Implementations
/// hold no mutable cross-request state and perform no side effects beyond
/// the backend call itself. Input that is empty after trimming fails with
/// `InvalidInput`.
#[async_trait]
pub trait TextClassifier: Send + Sync + Debug {
    /// Classify a piece of text into a normalized label/score sequence
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;

    /// Get the provider identifier reported in results and health checks
    fn provider_name(&self) -> &'static str;
}
