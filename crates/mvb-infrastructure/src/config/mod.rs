//! Configuration
//!
//! Typed configuration and the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, MediationConfig, MediationSettings};
