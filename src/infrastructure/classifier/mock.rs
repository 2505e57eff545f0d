//! Deterministic offline classifier

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::classification::{validate_input, Classification, LabelScore};
use crate::domain::{ClassifyError, TextClassifier};

const PROVIDER_NAME: &str = "mock";

/// Offline classifier producing a deterministic POSITIVE/NEGATIVE pair.
///
/// No network, no randomness: the positive score is a pure function of the
/// text (keyword-driven, with a digest-derived fallback), so repeated
/// calls with the same input are bit-identical across runs and processes.
/// Safe default when no external credentials are configured.
#[derive(Debug, Default)]
pub struct MockClassifier;

impl MockClassifier {
    pub fn new() -> Self {
        Self
    }

    fn positive_score(text: &str) -> f64 {
        let lowered = text.to_lowercase();

        if lowered.contains("good") || lowered.contains("love") {
            return 0.95;
        }

        if lowered.contains("bad") || lowered.contains("hate") {
            return 0.05;
        }

        // No sentiment keyword: derive a stable mid-range score from the
        // first digest byte, mapped into [0.25, 0.75].
        let digest = Sha256::digest(lowered.as_bytes());
        0.25 + f64::from(digest[0]) / 255.0 * 0.5
    }
}

#[async_trait]
impl TextClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let trimmed = validate_input(text)?;
        let positive = Self::positive_score(trimmed);
        let negative = 1.0 - positive;

        let mut labels = vec![
            LabelScore::new("POSITIVE", positive),
            LabelScore::new("NEGATIVE", negative),
        ];
        if negative > positive {
            labels.reverse();
        }

        Ok(Classification::new(PROVIDER_NAME, labels))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
