//! Monte Carlo trials over every measure combination.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{policy_actions, simulate_run, SimulationParameters};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::payoff::{DownstreamMeasures, TrialRecord, UpstreamMeasures};

/// Seeded Monte Carlo driver for the flood model.
#[derive(Debug, Clone)]
pub struct FloodSimulator {
    params: SimulationParameters,
    runs: u32,
    seed: u64,
}

impl FloodSimulator {
    /// Creates a simulator running `runs` trials per combination.
    ///
    /// # Errors
    /// `ErrorCode::ValidationFailed` for zero runs or invalid parameters.
    pub fn new(params: SimulationParameters, runs: u32, seed: u64) -> Result<Self, DomainError> {
        if runs == 0 {
            return Err(ValidationError::out_of_range("runs", 1.0, f64::from(u32::MAX), 0.0).into());
        }
        params.validate()?;
        Ok(Self { params, runs, seed })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Runs every (forest, dam, embankment, relocation) combination.
    ///
    /// Each combination starts from a fresh generator seeded with the same
    /// seed, so combinations share their random stream as far as it goes.
    pub fn simulate_all(&self) -> Vec<TrialRecord> {
        let mut records = Vec::with_capacity(16 * self.runs as usize);
        for upstream in UpstreamMeasures::all() {
            for downstream in DownstreamMeasures::all() {
                records.extend(self.simulate(upstream, downstream));
            }
        }
        records
    }

    /// Runs one combination; runs are numbered from 1.
    pub fn simulate(
        &self,
        upstream: UpstreamMeasures,
        downstream: DownstreamMeasures,
    ) -> Vec<TrialRecord> {
        let actions = policy_actions(upstream, downstream, &self.params);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        (1..=self.runs)
            .map(|run| {
                let outcome = simulate_run(&self.params, &actions, &mut rng);
                TrialRecord {
                    upstream,
                    downstream,
                    run,
                    upstream_cost: outcome.upstream_cost,
                    downstream_cost: outcome.downstream_cost,
                    cumulative_damage: outcome.cumulative_damage,
                    final_ecosystem: outcome.final_ecosystem,
                }
            })
            .collect()
    }
}
