//! Equilibrium Analyzer - pure-strategy Nash equilibria by exhaustive best-response checks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cell, DomainError, Outcome, Role, Strategy};
use crate::domain::payoff::PayoffModel;

/// Slack allowed when comparing payoffs for "no strict improvement".
pub const NASH_TOLERANCE: f64 = 1e-10;

/// A pure-strategy Nash equilibrium with the payoffs it yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub outcome: Outcome,
    pub upstream_payoff: f64,
    pub downstream_payoff: f64,
}

/// Non-cooperative analysis functions.
pub struct EquilibriumAnalyzer;

impl EquilibriumAnalyzer {
    /// Finds all pure-strategy Nash equilibria.
    ///
    /// # Algorithm
    /// (sU, sD) is an equilibrium iff neither role can strictly improve by a
    /// unilateral deviation:
    /// payoff_U(sU, sD) >= payoff_U(altU, sD) - ε for all altU, and
    /// payoff_D(sU, sD) >= payoff_D(sU, altD) - ε for all altD.
    ///
    /// # Edge Cases
    /// - Ties are weak best responses and do not disqualify an outcome
    /// - No equilibrium: Returns empty Vec
    /// - Order follows enumeration (upstream-major)
    pub fn find_nash_equilibria(model: &PayoffModel) -> Vec<Equilibrium> {
        model
            .space()
            .cells()
            .filter(|&cell| {
                Self::is_best_response(model, Role::Upstream, cell)
                    && Self::is_best_response(model, Role::Downstream, cell)
            })
            .map(|cell| {
                let payoffs = model.payoffs_at(cell);
                Equilibrium {
                    outcome: model.space().outcome_at(cell),
                    upstream_payoff: payoffs.upstream,
                    downstream_payoff: payoffs.downstream,
                }
            })
            .collect()
    }

    /// Checks whether `role`'s strategy at `cell` is a weak best response to
    /// the opponent's strategy at `cell`.
    pub fn is_best_response(model: &PayoffModel, role: Role, cell: Cell) -> bool {
        let current = model.payoff_at(role, cell);
        Self::deviations(model, role, cell)
            .all(|alt| model.payoff_at(role, alt) <= current + NASH_TOLERANCE)
    }

    /// Lists `role`'s weak best responses to a fixed opponent strategy.
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if `opponent` is not in the opponent's set.
    pub fn best_responses(
        model: &PayoffModel,
        role: Role,
        opponent: &Strategy,
    ) -> Result<Vec<Strategy>, DomainError> {
        let space = model.space();
        let opponent_role = role.opponent();
        let fixed = space
            .strategies(opponent_role)
            .index_of(opponent.as_str())
            .ok_or_else(|| DomainError::unknown_strategy(opponent_role, opponent.as_str()))?;

        let cell_for = |own: usize| match role {
            Role::Upstream => Cell { upstream: own, downstream: fixed },
            Role::Downstream => Cell { upstream: fixed, downstream: own },
        };

        let own_count = space.strategies(role).len();
        let best = (0..own_count)
            .map(|own| model.payoff_at(role, cell_for(own)))
            .fold(f64::NEG_INFINITY, f64::max);

        Ok((0..own_count)
            .filter(|&own| model.payoff_at(role, cell_for(own)) >= best - NASH_TOLERANCE)
            .filter_map(|own| space.strategies(role).get(own).cloned())
            .collect())
    }

    /// Cells reachable from `cell` by a unilateral change of `role`'s strategy.
    fn deviations(model: &PayoffModel, role: Role, cell: Cell) -> impl Iterator<Item = Cell> {
        let count = model.space().strategies(role).len();
        (0..count).map(move |alt| match role {
            Role::Upstream => Cell { upstream: alt, ..cell },
            Role::Downstream => Cell { downstream: alt, ..cell },
        })
    }
}
