//! Trial source backed by the flood simulator.

use crate::domain::foundation::DomainError;
use crate::domain::payoff::TrialRecord;
use crate::domain::simulation::FloodSimulator;
use crate::ports::TrialSource;

/// Produces trial records by running the Monte Carlo simulation on demand.
#[derive(Debug, Clone)]
pub struct SimulatedTrialSource {
    simulator: FloodSimulator,
}

impl SimulatedTrialSource {
    pub fn new(simulator: FloodSimulator) -> Self {
        Self { simulator }
    }
}

impl TrialSource for SimulatedTrialSource {
    fn load_trials(&self) -> Result<Vec<TrialRecord>, DomainError> {
        tracing::info!(
            runs = self.simulator.runs(),
            "Running flood simulation for all measure combinations"
        );
        let records = self.simulator.simulate_all();
        tracing::debug!(records = records.len(), "Flood simulation finished");
        Ok(records)
    }
}
