//! Classification provider implementations

mod factory;
mod http_client;
mod huggingface;
mod mock;

pub use factory::{ClassifierConfig, ClassifierFactory, ProviderKind};
pub use http_client::{HttpCallError, HttpClient, HttpClientTrait};
pub use huggingface::{HuggingFaceClassifier, DEFAULT_ENDPOINT};
pub use mock::MockClassifier;
