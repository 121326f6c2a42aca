//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RIVER_RESILIENCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use river_resilience::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Input mode: {:?}", config.input.mode);
//! ```

mod analysis;
mod error;
mod input;
mod logging;
mod simulation;
mod weights;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use input::{InputConfig, InputMode};
pub use logging::LoggingConfig;
pub use simulation::SimulationConfig;
pub use weights::{RoleWeightsConfig, WeightsConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment analyzes the built-in
/// literal example. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Risk percentiles and coalition baselines
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Per-player attribute weights
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Payoff source (empirical, literal, simulated) and file paths
    #[serde(default)]
    pub input: InputConfig,

    /// Monte Carlo runs and seed
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RIVER_RESILIENCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RIVER_RESILIENCE__ANALYSIS__DOWNSTREAM_PERCENTILE=99` -> `analysis.downstream_percentile = 99`
    /// - `RIVER_RESILIENCE__WEIGHTS__UPSTREAM__SAFETY=2` -> `weights.upstream.safety = 2`
    /// - `RIVER_RESILIENCE__INPUT__MODE=simulated` -> `input.mode = simulated`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RIVER_RESILIENCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.weights.validate()?;
        self.input.validate()?;
        self.simulation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "RIVER_RESILIENCE__ANALYSIS__UPSTREAM_PERCENTILE",
        "RIVER_RESILIENCE__ANALYSIS__DOWNSTREAM_BASELINE",
        "RIVER_RESILIENCE__WEIGHTS__UPSTREAM__SAFETY",
        "RIVER_RESILIENCE__INPUT__MODE",
        "RIVER_RESILIENCE__INPUT__TRIALS_PATH",
        "RIVER_RESILIENCE__SIMULATION__RUNS",
        "RIVER_RESILIENCE__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.input.mode, InputMode::Literal);
        assert_eq!(config.analysis.upstream_percentile, 50.0);
        assert_eq!(config.simulation.runs, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RIVER_RESILIENCE__ANALYSIS__UPSTREAM_PERCENTILE", "99");
        env::set_var("RIVER_RESILIENCE__ANALYSIS__DOWNSTREAM_BASELINE", "Embankment");
        env::set_var("RIVER_RESILIENCE__WEIGHTS__UPSTREAM__SAFETY", "2.5");
        env::set_var("RIVER_RESILIENCE__INPUT__MODE", "simulated");
        env::set_var("RIVER_RESILIENCE__SIMULATION__RUNS", "200");
        env::set_var("RIVER_RESILIENCE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.upstream_percentile, 99.0);
        assert_eq!(
            config.analysis.downstream_baseline.as_deref(),
            Some("Embankment")
        );
        assert_eq!(config.weights.upstream.safety, 2.5);
        assert_eq!(config.weights.upstream.economic, 1.0);
        assert_eq!(config.input.mode, InputMode::Simulated);
        assert_eq!(config.simulation.runs, 200);
        assert!(config.logging.json);
    }

    #[test]
    fn test_empirical_without_path_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RIVER_RESILIENCE__INPUT__MODE", "empirical");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("input.trials_path"))
        );
    }

    #[test]
    fn test_empirical_with_path_is_valid() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RIVER_RESILIENCE__INPUT__MODE", "empirical");
        env::set_var("RIVER_RESILIENCE__INPUT__TRIALS_PATH", "sim_data.csv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input.trials_path.as_deref(), Some("sim_data.csv"));
    }
}
