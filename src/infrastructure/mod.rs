//! Infrastructure layer - External service implementations

pub mod cache;
pub mod classifier;
pub mod logging;
pub mod services;
