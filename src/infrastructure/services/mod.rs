//! Application services

mod classification_service;

pub use classification_service::{
    ClassificationCacheConfig, ClassificationOutcome, ClassificationService,
};
