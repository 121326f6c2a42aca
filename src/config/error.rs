//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Risk percentile for {role} must be between 0 and 100, got {value}")]
    InvalidPercentile { role: &'static str, value: f64 },

    #[error("Weights for {role} must be non-negative, finite and not all zero")]
    InvalidWeights { role: &'static str },

    #[error("Baseline strategy for {role} cannot be blank")]
    BlankBaseline { role: &'static str },

    #[error("Simulation runs must be at least 1")]
    InvalidRuns,

    #[error("Log level cannot be empty")]
    EmptyLogLevel,
}
