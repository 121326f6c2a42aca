//! RunGameAnalysisHandler - builds a payoff model and runs every analyzer on it.

use std::sync::Arc;

use crate::domain::analysis::{CoalitionBaseline, GameAnalysisReport};
use crate::domain::foundation::{DomainError, OutcomeSpace, Strategy};
use crate::domain::payoff::{PayoffModel, PlayerWeights, RiskProfile, TrialSamples};
use crate::ports::{LiteralTablesSource, TrialSink, TrialSource};

/// Which construction path the payoff model takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoffInput {
    /// Percentiles of trial records over the river measures space.
    Empirical,
    /// Literal attribute tables.
    Literal,
}

/// Command to analyze one game.
#[derive(Debug, Clone)]
pub struct RunGameAnalysisCommand {
    pub input: PayoffInput,
    /// Only used for empirical input.
    pub risk: RiskProfile,
    pub weights: PlayerWeights,
    /// Overrides the first upstream strategy as coalition baseline.
    pub upstream_baseline: Option<String>,
    /// Overrides the first downstream strategy as coalition baseline.
    pub downstream_baseline: Option<String>,
}

/// Handler for game analysis runs.
pub struct RunGameAnalysisHandler {
    trials: Arc<dyn TrialSource>,
    tables: Arc<dyn LiteralTablesSource>,
    trial_sink: Option<Arc<dyn TrialSink>>,
}

impl RunGameAnalysisHandler {
    pub fn new(trials: Arc<dyn TrialSource>, tables: Arc<dyn LiteralTablesSource>) -> Self {
        Self {
            trials,
            tables,
            trial_sink: None,
        }
    }

    /// Also persists every loaded trial record to `sink`.
    pub fn with_trial_sink(mut self, sink: Arc<dyn TrialSink>) -> Self {
        self.trial_sink = Some(sink);
        self
    }

    pub fn handle(&self, cmd: RunGameAnalysisCommand) -> Result<GameAnalysisReport, DomainError> {
        // 1. Build the payoff model
        let model = match cmd.input {
            PayoffInput::Empirical => self.empirical_model(&cmd)?,
            PayoffInput::Literal => self.literal_model(&cmd)?,
        };
        tracing::debug!(
            outcomes = model.space().len(),
            basis = ?model.basis(),
            "Payoff model built"
        );

        // 2. Resolve coalition baselines
        let mut baseline = CoalitionBaseline::first_strategies(&model);
        if let Some(label) = cmd.upstream_baseline {
            baseline.upstream = Strategy::new(label);
        }
        if let Some(label) = cmd.downstream_baseline {
            baseline.downstream = Strategy::new(label);
        }

        // 3. Analyze
        let report = GameAnalysisReport::compute(&model, &baseline)?;
        tracing::info!(
            equilibria = report.equilibria.len(),
            core_non_empty = report.cooperative.core.non_empty,
            borda_winner = %report.social_choice.winner,
            "Game analysis complete"
        );

        Ok(report)
    }

    fn empirical_model(&self, cmd: &RunGameAnalysisCommand) -> Result<PayoffModel, DomainError> {
        let records = self.trials.load_trials()?;
        if let Some(sink) = &self.trial_sink {
            sink.write_trials(&records)?;
        }

        let samples = TrialSamples::from_records(&records);
        tracing::debug!(
            records = records.len(),
            outcomes = samples.outcome_count(),
            upstream_percentile = cmd.risk.upstream.value(),
            downstream_percentile = cmd.risk.downstream.value(),
            "Grouped trial records"
        );

        PayoffModel::empirical(OutcomeSpace::river_measures(), &samples, cmd.risk, cmd.weights)
    }

    fn literal_model(&self, cmd: &RunGameAnalysisCommand) -> Result<PayoffModel, DomainError> {
        let tables = self.tables.load_tables()?;
        PayoffModel::literal(&tables, cmd.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Outcome};
    use crate::domain::payoff::{
        DownstreamMeasures, LiteralTables, PayoffBasis, TrialRecord, UpstreamMeasures,
    };
    use std::sync::Mutex;

    struct MockTrialSource {
        records: Vec<TrialRecord>,
    }

    impl TrialSource for MockTrialSource {
        fn load_trials(&self) -> Result<Vec<TrialRecord>, DomainError> {
            Ok(self.records.clone())
        }
    }

    struct MockTablesSource;

    impl LiteralTablesSource for MockTablesSource {
        fn load_tables(&self) -> Result<LiteralTables, DomainError> {
            Ok(LiteralTables::river_example())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        written: Mutex<usize>,
    }

    impl TrialSink for RecordingSink {
        fn write_trials(&self, records: &[TrialRecord]) -> Result<(), DomainError> {
            *self.written.lock().unwrap() += records.len();
            Ok(())
        }
    }

    /// One record per river measure combination; dam and embankment cost more
    /// and reduce damage.
    fn all_combinations() -> Vec<TrialRecord> {
        let mut records = Vec::new();
        for upstream in UpstreamMeasures::all() {
            for downstream in DownstreamMeasures::all() {
                let up = f64::from(u8::from(upstream.forest) + u8::from(upstream.dam));
                let down =
                    f64::from(u8::from(downstream.embankment) + u8::from(downstream.relocation));
                records.push(TrialRecord {
                    upstream,
                    downstream,
                    run: 1,
                    upstream_cost: up * 10.0,
                    downstream_cost: down * 10.0,
                    cumulative_damage: 100.0 - 20.0 * (up + down),
                    final_ecosystem: 100.0 - up,
                });
            }
        }
        records
    }

    fn handler(records: Vec<TrialRecord>) -> RunGameAnalysisHandler {
        RunGameAnalysisHandler::new(
            Arc::new(MockTrialSource { records }),
            Arc::new(MockTablesSource),
        )
    }

    fn command(input: PayoffInput) -> RunGameAnalysisCommand {
        RunGameAnalysisCommand {
            input,
            risk: RiskProfile::default(),
            weights: PlayerWeights::default(),
            upstream_baseline: None,
            downstream_baseline: None,
        }
    }

    #[test]
    fn literal_input_analyzes_example() {
        let report = handler(Vec::new()).handle(command(PayoffInput::Literal)).unwrap();
        assert_eq!(report.basis, PayoffBasis::Literal);
        assert_eq!(report.equilibria[0].outcome, Outcome::new("PT", "RE"));
        assert_eq!(report.cooperative.baseline, CoalitionBaseline::new("NP", "DN"));
    }

    #[test]
    fn baseline_overrides_are_applied() {
        let mut cmd = command(PayoffInput::Literal);
        cmd.downstream_baseline = Some("IL".to_string());
        let report = handler(Vec::new()).handle(cmd).unwrap();
        assert_eq!(report.cooperative.baseline, CoalitionBaseline::new("NP", "IL"));
        assert_eq!(report.cooperative.core.v_upstream, 1.0);
    }

    #[test]
    fn unknown_baseline_fails() {
        let mut cmd = command(PayoffInput::Literal);
        cmd.upstream_baseline = Some("Forest".to_string());
        let err = handler(Vec::new()).handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStrategy);
    }

    #[test]
    fn empirical_input_uses_river_measures() {
        let report = handler(all_combinations())
            .handle(command(PayoffInput::Empirical))
            .unwrap();
        assert_eq!(report.payoffs.len(), 16);
        assert_eq!(report.cooperative.baseline, CoalitionBaseline::new("No", "No"));
        assert!(matches!(report.basis, PayoffBasis::Empirical { .. }));
    }

    #[test]
    fn empirical_input_with_gaps_is_missing_data() {
        let mut records = all_combinations();
        records.pop();
        let err = handler(records)
            .handle(command(PayoffInput::Empirical))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingData);
    }

    #[test]
    fn trial_sink_receives_loaded_records() {
        let sink = Arc::new(RecordingSink::default());
        let handler = handler(all_combinations()).with_trial_sink(sink.clone());

        handler.handle(command(PayoffInput::Empirical)).unwrap();
        assert_eq!(*sink.written.lock().unwrap(), 16);
    }
}
