//! Caching domain models and traits

mod key;
mod repository;

pub use key::classification_key;
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
