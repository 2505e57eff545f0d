//! Classification provider domain trait

mod provider;

pub use provider::TextClassifier;

#[cfg(test)]
pub use provider::mock::{CountingClassifier, FailingClassifier};
