//! Input configuration: where payoffs come from

use serde::Deserialize;

use super::error::ValidationError;

/// Source of the payoff model
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Trial records read from a CSV file
    Empirical,
    /// Literal attribute tables, from YAML or the built-in example
    #[default]
    Literal,
    /// Trial records produced by the flood simulator
    Simulated,
}

/// Input configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub mode: InputMode,

    /// Trial CSV to read (empirical mode)
    pub trials_path: Option<String>,

    /// Literal tables YAML; the built-in example is used when unset
    pub tables_path: Option<String>,

    /// Where simulated trials are also written, if anywhere
    pub trials_output_path: Option<String>,
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == InputMode::Empirical && self.trials_path.is_none() {
            return Err(ValidationError::MissingRequired("input.trials_path"));
        }
        Ok(())
    }
}
