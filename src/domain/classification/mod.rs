//! Canonical classification result types

use serde::{Deserialize, Serialize};

use super::error::ClassifyError;

/// A single label with its confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Provider-agnostic classification result.
///
/// This is the canonical shape every backend must produce: an ordered,
/// non-empty label/score sequence plus the identifier of the provider that
/// produced it. The ordering is whatever the backend emitted (the mock
/// provider emits descending scores; the Hugging Face API already returns
/// them sorted). Scores each lie in `[0, 1]` but need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub labels: Vec<LabelScore>,
    pub provider: String,
}

impl Classification {
    pub fn new(provider: impl Into<String>, labels: Vec<LabelScore>) -> Self {
        Self {
            labels,
            provider: provider.into(),
        }
    }

    /// Checks the result invariants: non-empty sequence, non-empty labels,
    /// scores in `[0, 1]`. Used when normalizing untrusted backend output.
    pub fn validate(&self) -> Result<(), String> {
        if self.labels.is_empty() {
            return Err("label sequence is empty".to_string());
        }

        for entry in &self.labels {
            if entry.label.is_empty() {
                return Err("empty label string".to_string());
            }

            if !(0.0..=1.0).contains(&entry.score) || entry.score.is_nan() {
                return Err(format!(
                    "score {} for label '{}' is outside [0, 1]",
                    entry.score, entry.label
                ));
            }
        }

        Ok(())
    }

    /// The highest-scoring label, if any
    pub fn top(&self) -> Option<&LabelScore> {
        self.labels
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// Validates classification input, returning the trimmed text.
///
/// Every provider and the orchestrator share this check: input must be
/// non-empty after trimming leading and trailing whitespace.
pub fn validate_input(text: &str) -> Result<&str, ClassifyError> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(ClassifyError::invalid_input(
            "text must not be empty or whitespace-only",
        ));
    }

    Ok(trimmed)
}
