//! Game analysis report.
//!
//! Summarized results of every analyzer for one payoff model, shaped for
//! JSON output.

use serde::{Deserialize, Serialize};

use super::{
    BordaScore, CoalitionBaseline, CooperativeAnalysis, CooperativeAnalyzer, Equilibrium,
    EquilibriumAnalyzer, SocialChoiceAnalyzer,
};
use crate::domain::foundation::{DomainError, Outcome};
use crate::domain::payoff::{PayoffBasis, PayoffModel, PlayerWeights};

/// Payoffs of one outcome in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomePayoffs {
    pub outcome: Outcome,
    pub upstream: f64,
    pub downstream: f64,
    /// upstream + downstream.
    pub social: f64,
}

/// Borda section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialChoiceSummary {
    pub winner: Outcome,
    pub winner_social_payoff: f64,
    pub scores: Vec<BordaScore>,
}

/// Full analysis of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysisReport {
    /// How the payoffs were derived.
    pub basis: PayoffBasis,
    pub weights: PlayerWeights,
    /// Every outcome, in enumeration order.
    pub payoffs: Vec<OutcomePayoffs>,
    pub equilibria: Vec<Equilibrium>,
    pub cooperative: CooperativeAnalysis,
    pub social_choice: SocialChoiceSummary,
}

impl GameAnalysisReport {
    /// Runs every analyzer over `model`.
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if the baseline is not in the model's space.
    pub fn compute(model: &PayoffModel, baseline: &CoalitionBaseline) -> Result<Self, DomainError> {
        let payoffs = model
            .entries()
            .map(|(outcome, pair)| OutcomePayoffs {
                outcome,
                upstream: pair.upstream,
                downstream: pair.downstream,
                social: pair.total(),
            })
            .collect();

        let cooperative = CooperativeAnalyzer::analyze(model, baseline)?;

        let borda = SocialChoiceAnalyzer::borda_winner(model);
        let winner_social_payoff = SocialChoiceAnalyzer::social_payoff(model, &borda.winner)?;

        Ok(Self {
            basis: model.basis(),
            weights: *model.weights(),
            payoffs,
            equilibria: EquilibriumAnalyzer::find_nash_equilibria(model),
            cooperative,
            social_choice: SocialChoiceSummary {
                winner: borda.winner,
                winner_social_payoff,
                scores: borda.scores,
            },
        })
    }
}
