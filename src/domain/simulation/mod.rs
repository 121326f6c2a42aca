//! Simulation Module - seeded Monte Carlo flood model of the river basin.
//!
//! Produces [`TrialRecord`](crate::domain::payoff::TrialRecord)s for all
//! sixteen upstream/downstream measure combinations, the empirical input of
//! the payoff model.

mod flood_model;
mod monte_carlo;
mod parameters;
mod policy;

pub use flood_model::{simulate_run, RunOutcome};
pub use monte_carlo::FloodSimulator;
pub use parameters::{
    BasinState, CapacityMeasure, EcosystemModel, RainfallModel, RelocationMeasure,
    SimulationParameters,
};
pub use policy::{policy_actions, ActionKind, PolicyAction};
