//! Social Choice Analyzer - Borda aggregation of both players' preferences.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cell, DomainError, Outcome, Role};
use crate::domain::payoff::PayoffModel;

/// Borda score of one outcome: its rank by upstream plus its rank by downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BordaScore {
    pub outcome: Outcome,
    pub upstream_rank: usize,
    pub downstream_rank: usize,
    pub score: usize,
}

/// Result of the Borda rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BordaResult {
    pub winner: Outcome,
    /// One score per outcome, in enumeration order.
    pub scores: Vec<BordaScore>,
}

impl BordaResult {
    /// Score of an outcome, if it belongs to the ranked space.
    pub fn score_of(&self, outcome: &Outcome) -> Option<usize> {
        self.scores
            .iter()
            .find(|s| &s.outcome == outcome)
            .map(|s| s.score)
    }
}

/// Social choice functions.
pub struct SocialChoiceAnalyzer;

impl SocialChoiceAnalyzer {
    /// A role's preference order over all outcomes, best first.
    ///
    /// Sorting is stable: outcomes with equal payoff keep enumeration order.
    pub fn ranking(model: &PayoffModel, role: Role) -> Vec<Outcome> {
        Self::ranked_cells(model, role)
            .into_iter()
            .map(|cell| model.space().outcome_at(cell))
            .collect()
    }

    /// Applies the Borda rule.
    ///
    /// # Algorithm
    /// 1. Rank all outcomes by payoff_U descending, then by payoff_D
    ///    descending (stable, rank 0 = top)
    /// 2. Score = rank_U + rank_D
    /// 3. Winner = lowest score, first in enumeration order on ties
    pub fn borda_winner(model: &PayoffModel) -> BordaResult {
        let space = model.space();
        let mut upstream_rank = vec![0; space.len()];
        let mut downstream_rank = vec![0; space.len()];

        for (rank, cell) in Self::ranked_cells(model, Role::Upstream).into_iter().enumerate() {
            upstream_rank[space.position(cell)] = rank;
        }
        for (rank, cell) in Self::ranked_cells(model, Role::Downstream).into_iter().enumerate() {
            downstream_rank[space.position(cell)] = rank;
        }

        let scores: Vec<BordaScore> = space
            .cells()
            .map(|cell| {
                let pos = space.position(cell);
                BordaScore {
                    outcome: space.outcome_at(cell),
                    upstream_rank: upstream_rank[pos],
                    downstream_rank: downstream_rank[pos],
                    score: upstream_rank[pos] + downstream_rank[pos],
                }
            })
            .collect();

        // Strict comparison keeps the earliest outcome on ties. Strategy sets
        // are never empty, so there is always a first score.
        let mut winner = &scores[0];
        for candidate in &scores[1..] {
            if candidate.score < winner.score {
                winner = candidate;
            }
        }
        let winner = winner.outcome.clone();

        BordaResult { winner, scores }
    }

    /// Sum of both players' payoffs for an outcome.
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if the outcome is not in the space.
    pub fn social_payoff(model: &PayoffModel, outcome: &Outcome) -> Result<f64, DomainError> {
        let cell = model.space().locate(outcome)?;
        Ok(model.payoffs_at(cell).total())
    }

    fn ranked_cells(model: &PayoffModel, role: Role) -> Vec<Cell> {
        let mut cells: Vec<Cell> = model.space().cells().collect();
        cells.sort_by(|a, b| {
            model
                .payoff_at(role, *b)
                .total_cmp(&model.payoff_at(role, *a))
        });
        cells
    }
}
