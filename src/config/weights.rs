//! Attribute weight configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::AttributeWeights;
use crate::domain::payoff::PlayerWeights;

/// One player's attribute weights
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RoleWeightsConfig {
    #[serde(default = "default_weight")]
    pub economic: f64,

    #[serde(default = "default_weight")]
    pub safety: f64,

    #[serde(default = "default_weight")]
    pub environmental: f64,
}

impl RoleWeightsConfig {
    fn to_weights(self, role: &'static str) -> Result<AttributeWeights, ValidationError> {
        AttributeWeights::try_new(self.economic, self.safety, self.environmental)
            .map_err(|_| ValidationError::InvalidWeights { role })
    }
}

impl Default for RoleWeightsConfig {
    fn default() -> Self {
        Self {
            economic: default_weight(),
            safety: default_weight(),
            environmental: default_weight(),
        }
    }
}

/// Attribute weights of both players
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
pub struct WeightsConfig {
    #[serde(default)]
    pub upstream: RoleWeightsConfig,

    #[serde(default)]
    pub downstream: RoleWeightsConfig,
}

impl WeightsConfig {
    /// Weights as domain values
    pub fn player_weights(&self) -> Result<PlayerWeights, ValidationError> {
        Ok(PlayerWeights::new(
            self.upstream.to_weights("upstream")?,
            self.downstream.to_weights("downstream")?,
        ))
    }

    /// Validate weight configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.player_weights().map(|_| ())
    }
}

fn default_weight() -> f64 {
    1.0
}
