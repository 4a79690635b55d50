// src/core/mod.rs
pub mod config;
pub mod validation;

pub use config::{Config, ConfigError};
pub use validation::ValidationError;
