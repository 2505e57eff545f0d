//! Classification endpoint request/response types

use serde::{Deserialize, Serialize};

use crate::domain::LabelScore;
use crate::infrastructure::services::ClassificationOutcome;

/// POST /classify request body
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// POST /classify response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub labels: Vec<LabelScore>,
    pub from_cache: bool,
    pub meta: ClassifyMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyMeta {
    pub provider: String,
}

impl From<ClassificationOutcome> for ClassifyResponse {
    fn from(outcome: ClassificationOutcome) -> Self {
        Self {
            from_cache: outcome.from_cache,
            meta: ClassifyMeta {
                provider: outcome.result.provider.clone(),
            },
            labels: outcome.result.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Classification;

    #[test]
    fn test_response_from_outcome() {
        let outcome = ClassificationOutcome {
            result: Classification::new(
                "mock",
                vec![
                    LabelScore::new("POSITIVE", 0.95),
                    LabelScore::new("NEGATIVE", 0.05),
                ],
            ),
            from_cache: true,
        };

        let response = ClassifyResponse::from(outcome);
        assert!(response.from_cache);
        assert_eq!(response.meta.provider, "mock");
        assert_eq!(response.labels.len(), 2);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = ClassifyResponse {
            labels: vec![LabelScore::new("POSITIVE", 0.95)],
            from_cache: false,
            meta: ClassifyMeta {
                provider: "mock".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["labels"][0]["label"], "POSITIVE");
        assert_eq!(json["from_cache"], false);
        assert_eq!(json["meta"]["provider"], "mock");
    }
}
