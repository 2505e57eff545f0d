//! Domain layer - Core business logic and entities

pub mod cache;
pub mod classification;
pub mod classifier;
pub mod error;

pub use cache::{classification_key, Cache, CacheExt};
pub use classification::{validate_input, Classification, LabelScore};
pub use classifier::TextClassifier;
pub use error::ClassifyError;
