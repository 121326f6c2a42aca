//! Flood simulation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Monte Carlo settings
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Trials per measure combination
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Seed shared by every combination
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl SimulationConfig {
    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.runs == 0 {
            return Err(ValidationError::InvalidRuns);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            seed: default_seed(),
        }
    }
}

fn default_runs() -> u32 {
    1000
}

fn default_seed() -> u64 {
    42
}
