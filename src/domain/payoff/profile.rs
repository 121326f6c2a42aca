//! Per-player risk attitudes and attribute weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeWeights, RiskPercentile, Role};

/// The percentile each player reads trial distributions at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub upstream: RiskPercentile,
    pub downstream: RiskPercentile,
}

impl RiskProfile {
    pub fn new(upstream: RiskPercentile, downstream: RiskPercentile) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    pub fn for_role(&self, role: Role) -> RiskPercentile {
        match role {
            Role::Upstream => self.upstream,
            Role::Downstream => self.downstream,
        }
    }
}

/// Attribute weights for both players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerWeights {
    pub upstream: AttributeWeights,
    pub downstream: AttributeWeights,
}

impl PlayerWeights {
    pub fn new(upstream: AttributeWeights, downstream: AttributeWeights) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    pub fn for_role(&self, role: Role) -> &AttributeWeights {
        match role {
            Role::Upstream => &self.upstream,
            Role::Downstream => &self.downstream,
        }
    }
}
