//! Policy actions scheduled by a measure combination.

use serde::{Deserialize, Serialize};

use super::SimulationParameters;
use crate::domain::payoff::{DownstreamMeasures, UpstreamMeasures};

/// What an action does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    Forest { amount: f64 },
    Dam { amount: f64 },
    Embankment { amount: f64 },
    Relocate { houses: u32 },
}

/// One action taken in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyAction {
    pub year: i32,
    pub kind: ActionKind,
}

/// Actions implied by the measures each role adopts.
pub fn policy_actions(
    upstream: UpstreamMeasures,
    downstream: DownstreamMeasures,
    params: &SimulationParameters,
) -> Vec<PolicyAction> {
    let mut actions = Vec::new();
    if upstream.forest {
        actions.push(PolicyAction {
            year: params.forest.investment_year,
            kind: ActionKind::Forest { amount: 1.0 },
        });
    }
    if upstream.dam {
        actions.push(PolicyAction {
            year: params.dam.investment_year,
            kind: ActionKind::Dam { amount: 1.0 },
        });
    }
    if downstream.embankment {
        actions.push(PolicyAction {
            year: params.embankment.investment_year,
            kind: ActionKind::Embankment { amount: 1.0 },
        });
    }
    if downstream.relocation {
        actions.push(PolicyAction {
            year: params.relocation.year,
            kind: ActionKind::Relocate {
                houses: params.relocation.houses,
            },
        });
    }
    actions
}
