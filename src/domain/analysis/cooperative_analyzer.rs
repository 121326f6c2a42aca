//! Cooperative Analyzer - characteristic function, core and Shapley value.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Cell, Coalition, DomainError, Outcome, Role, Strategy};
use crate::domain::payoff::PayoffModel;

/// Slack allowed in the superadditivity test for core non-emptiness.
pub const CORE_TOLERANCE: f64 = 1e-10;

/// The opponent strategy each singleton coalition is evaluated against.
///
/// `upstream` is the strategy upstream is assumed to play when downstream
/// stands alone, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoalitionBaseline {
    pub upstream: Strategy,
    pub downstream: Strategy,
}

impl CoalitionBaseline {
    pub fn new(upstream: impl Into<String>, downstream: impl Into<String>) -> Self {
        Self {
            upstream: Strategy::new(upstream),
            downstream: Strategy::new(downstream),
        }
    }

    /// The first label of each strategy set, which by convention is "do nothing".
    pub fn first_strategies(model: &PayoffModel) -> Self {
        let space = model.space();
        Self {
            upstream: space.strategies(Role::Upstream).first().clone(),
            downstream: space.strategies(Role::Downstream).first().clone(),
        }
    }

    /// Resolves the baseline against the model's space.
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if either label is not in its strategy set.
    fn resolve(&self, model: &PayoffModel) -> Result<Cell, DomainError> {
        model
            .space()
            .locate(&Outcome {
                upstream: self.upstream.clone(),
                downstream: self.downstream.clone(),
            })
    }
}

/// Result of the two-player core check. All three values are always reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreCheck {
    pub non_empty: bool,
    pub v_upstream: f64,
    pub v_downstream: f64,
    pub v_grand: f64,
}

impl CoreCheck {
    /// Interval of upstream shares that leave both players at least their
    /// standalone value: [v_U, v_UD - v_D]. `None` when the core is empty.
    pub fn upstream_share_range(&self) -> Option<(f64, f64)> {
        self.non_empty
            .then(|| (self.v_upstream, self.v_grand - self.v_downstream))
    }

    /// Checks whether the allocation (x_U, x_D) is in the core.
    pub fn contains(&self, x_upstream: f64, x_downstream: f64) -> bool {
        self.non_empty
            && (x_upstream + x_downstream - self.v_grand).abs() <= CORE_TOLERANCE
            && x_upstream >= self.v_upstream - CORE_TOLERANCE
            && x_downstream >= self.v_downstream - CORE_TOLERANCE
    }
}

/// Shapley allocation of the grand coalition's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapleyValue {
    pub upstream: f64,
    pub downstream: f64,
}

impl ShapleyValue {
    pub fn for_role(&self, role: Role) -> f64 {
        match role {
            Role::Upstream => self.upstream,
            Role::Downstream => self.downstream,
        }
    }
}

/// Everything the cooperative analysis reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooperativeAnalysis {
    pub baseline: CoalitionBaseline,
    pub core: CoreCheck,
    pub shapley: ShapleyValue,
    /// Outcome achieving v({U,D}), first in enumeration order on ties.
    pub grand_coalition_outcome: Outcome,
}

/// Cooperative analysis functions.
pub struct CooperativeAnalyzer;

impl CooperativeAnalyzer {
    /// Characteristic function v(S).
    ///
    /// - v({}) = 0
    /// - v({U}) = max over sU of payoff_U(sU, baseline_D)
    /// - v({D}) = max over sD of payoff_D(baseline_U, sD)
    /// - v({U,D}) = max over all outcomes of payoff_U + payoff_D
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if the baseline is not in the model's space.
    pub fn coalition_value(
        model: &PayoffModel,
        baseline: &CoalitionBaseline,
        coalition: Coalition,
    ) -> Result<f64, DomainError> {
        let anchor = baseline.resolve(model)?;
        let space = model.space();

        Ok(match coalition {
            Coalition::Empty => 0.0,
            Coalition::Upstream => (0..space.strategies(Role::Upstream).len())
                .map(|u| {
                    model.payoff_at(
                        Role::Upstream,
                        Cell {
                            upstream: u,
                            downstream: anchor.downstream,
                        },
                    )
                })
                .fold(f64::NEG_INFINITY, f64::max),
            Coalition::Downstream => (0..space.strategies(Role::Downstream).len())
                .map(|d| {
                    model.payoff_at(
                        Role::Downstream,
                        Cell {
                            upstream: anchor.upstream,
                            downstream: d,
                        },
                    )
                })
                .fold(f64::NEG_INFINITY, f64::max),
            Coalition::Grand => Self::grand_coalition(model).1,
        })
    }

    /// Characteristic function over a member list of "U"/"D" labels.
    ///
    /// # Errors
    /// - `ErrorCode::InvalidCoalition` for unknown or repeated members
    /// - `ErrorCode::UnknownStrategy` if the baseline is not in the model's space
    pub fn coalition_value_of(
        model: &PayoffModel,
        baseline: &CoalitionBaseline,
        members: &[&str],
    ) -> Result<f64, DomainError> {
        Self::coalition_value(model, baseline, Coalition::from_members(members)?)
    }

    /// Two-player core check: non-empty iff v({U,D}) >= v({U}) + v({D}) - ε.
    pub fn check_core(
        model: &PayoffModel,
        baseline: &CoalitionBaseline,
    ) -> Result<CoreCheck, DomainError> {
        let v_upstream = Self::coalition_value(model, baseline, Coalition::Upstream)?;
        let v_downstream = Self::coalition_value(model, baseline, Coalition::Downstream)?;
        let v_grand = Self::coalition_value(model, baseline, Coalition::Grand)?;

        Ok(CoreCheck {
            non_empty: v_grand >= v_upstream + v_downstream - CORE_TOLERANCE,
            v_upstream,
            v_downstream,
            v_grand,
        })
    }

    /// Two-player Shapley value in closed form:
    ///
    /// phi_U = ½(v({U}) - v({})) + ½(v({U,D}) - v({D}))
    /// phi_D = ½(v({D}) - v({})) + ½(v({U,D}) - v({U}))
    pub fn shapley_values(
        model: &PayoffModel,
        baseline: &CoalitionBaseline,
    ) -> Result<ShapleyValue, DomainError> {
        let core = Self::check_core(model, baseline)?;
        Ok(Self::shapley_from(&core))
    }

    /// Runs the full cooperative analysis.
    pub fn analyze(
        model: &PayoffModel,
        baseline: &CoalitionBaseline,
    ) -> Result<CooperativeAnalysis, DomainError> {
        let core = Self::check_core(model, baseline)?;
        Ok(CooperativeAnalysis {
            baseline: baseline.clone(),
            core,
            shapley: Self::shapley_from(&core),
            grand_coalition_outcome: Self::grand_coalition(model).0,
        })
    }

    fn shapley_from(core: &CoreCheck) -> ShapleyValue {
        let v_empty = 0.0;
        ShapleyValue {
            upstream: 0.5 * (core.v_upstream - v_empty) + 0.5 * (core.v_grand - core.v_downstream),
            downstream: 0.5 * (core.v_downstream - v_empty) + 0.5 * (core.v_grand - core.v_upstream),
        }
    }

    /// The joint outcome maximizing total payoff, first on ties.
    ///
    /// Strategy sets are never empty, so cell (0, 0) always exists.
    fn grand_coalition(model: &PayoffModel) -> (Outcome, f64) {
        let first = Cell {
            upstream: 0,
            downstream: 0,
        };
        let mut best = (first, model.payoffs_at(first).total());
        for cell in model.space().cells().skip(1) {
            let total = model.payoffs_at(cell).total();
            if total > best.1 {
                best = (cell, total);
            }
        }
        (model.space().outcome_at(best.0), best.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AttributeVector, ErrorCode};
    use crate::domain::payoff::{LiteralTables, PlayerWeights};

    fn example_model() -> PayoffModel {
        PayoffModel::literal(&LiteralTables::river_example(), PlayerWeights::default()).unwrap()
    }

    fn example_baseline() -> CoalitionBaseline {
        CoalitionBaseline::new("NP", "DN")
    }

    /// 2 x 2 game whose payoffs are the economic attribute only.
    fn two_by_two(payoffs: [(f64, f64); 4]) -> PayoffModel {
        let mut builder = LiteralTables::builder()
            .upstream_strategies(vec!["a", "b"])
            .downstream_strategies(vec!["x", "y"]);
        for ((u, d), (pu, pd)) in [("a", "x"), ("a", "y"), ("b", "x"), ("b", "y")]
            .into_iter()
            .zip(payoffs)
        {
            builder = builder.entry(
                u,
                d,
                AttributeVector::new(pu, 0.0, 0.0),
                AttributeVector::new(pd, 0.0, 0.0),
            );
        }
        PayoffModel::literal(&builder.build().unwrap(), PlayerWeights::default()).unwrap()
    }

    #[test]
    fn baseline_defaults_to_first_strategies() {
        let baseline = CoalitionBaseline::first_strategies(&example_model());
        assert_eq!(baseline, example_baseline());
    }

    #[test]
    fn characteristic_function_of_example() {
        let model = example_model();
        let baseline = example_baseline();
        let v = |c| CooperativeAnalyzer::coalition_value(&model, &baseline, c).unwrap();

        assert_eq!(v(Coalition::Empty), 0.0);
        assert_eq!(v(Coalition::Upstream), 2.0);
        assert_eq!(v(Coalition::Downstream), 1.0);
        assert_eq!(v(Coalition::Grand), 4.0);
    }

    #[test]
    fn coalition_value_of_member_lists() {
        let model = example_model();
        let baseline = example_baseline();

        assert_eq!(
            CooperativeAnalyzer::coalition_value_of(&model, &baseline, &[]).unwrap(),
            0.0
        );
        assert_eq!(
            CooperativeAnalyzer::coalition_value_of(&model, &baseline, &["D", "U"]).unwrap(),
            4.0
        );
    }

    #[test]
    fn coalition_value_rejects_invalid_members() {
        let model = example_model();
        let baseline = example_baseline();

        for members in [&["X"][..], &["U", "X"][..], &["U", "U"][..]] {
            let err = CooperativeAnalyzer::coalition_value_of(&model, &baseline, members)
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCoalition);
        }
    }

    #[test]
    fn unknown_baseline_is_rejected() {
        let model = example_model();
        let err = CooperativeAnalyzer::check_core(&model, &CoalitionBaseline::new("NP", "Dam"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStrategy);
    }

    #[test]
    fn baseline_changes_singleton_values() {
        let model = example_model();
        // Upstream payoffs against IL are 0, 1, -2.
        let baseline = CoalitionBaseline::new("NP", "IL");
        let v_u =
            CooperativeAnalyzer::coalition_value(&model, &baseline, Coalition::Upstream).unwrap();
        assert_eq!(v_u, 1.0);
    }

    #[test]
    fn example_core_is_non_empty() {
        let core = CooperativeAnalyzer::check_core(&example_model(), &example_baseline()).unwrap();
        assert!(core.non_empty);
        assert_eq!(core.upstream_share_range(), Some((2.0, 3.0)));
        assert!(core.contains(2.5, 1.5));
        assert!(!core.contains(1.5, 2.5));
        assert!(!core.contains(2.5, 2.5));
    }

    #[test]
    fn empty_core_still_reports_values() {
        // v_U = 5 (b against x), v_D = 5 (y against a), v_UD = 6.
        let model = two_by_two([(0.0, 0.0), (1.0, 5.0), (5.0, 1.0), (3.0, 3.0)]);
        let baseline = CoalitionBaseline::new("a", "x");
        let core = CooperativeAnalyzer::check_core(&model, &baseline).unwrap();

        assert!(!core.non_empty);
        assert_eq!(core.v_upstream, 5.0);
        assert_eq!(core.v_downstream, 5.0);
        assert_eq!(core.v_grand, 6.0);
        assert_eq!(core.upstream_share_range(), None);
        assert!(!core.contains(3.0, 3.0));
    }

    #[test]
    fn shapley_values_of_example() {
        let phi =
            CooperativeAnalyzer::shapley_values(&example_model(), &example_baseline()).unwrap();
        assert_eq!(phi.upstream, 2.5);
        assert_eq!(phi.downstream, 1.5);
        assert_eq!(phi.for_role(Role::Upstream) + phi.for_role(Role::Downstream), 4.0);
    }

    #[test]
    fn shapley_of_additive_game_is_standalone_value() {
        // Each player's payoff depends on their own move only.
        let model = two_by_two([(1.0, 2.0), (1.0, 4.0), (3.0, 2.0), (3.0, 4.0)]);
        let baseline = CoalitionBaseline::new("a", "x");
        let phi = CooperativeAnalyzer::shapley_values(&model, &baseline).unwrap();
        assert_eq!(phi.upstream, 3.0);
        assert_eq!(phi.downstream, 4.0);
    }

    #[test]
    fn analyze_reports_grand_coalition_outcome() {
        let analysis = CooperativeAnalyzer::analyze(&example_model(), &example_baseline()).unwrap();
        assert_eq!(analysis.grand_coalition_outcome, Outcome::new("PT", "RE"));
        assert_eq!(analysis.baseline, example_baseline());
    }

    #[test]
    fn grand_coalition_ties_keep_first_outcome() {
        let model = two_by_two([(1.0, 1.0), (2.0, 0.0), (0.0, 0.0), (0.0, 2.0)]);
        let analysis =
            CooperativeAnalyzer::analyze(&model, &CoalitionBaseline::new("a", "x")).unwrap();
        assert_eq!(analysis.grand_coalition_outcome, Outcome::new("a", "x"));
    }

    #[test]
    fn single_outcome_game_is_its_own_grand_coalition() {
        let tables = LiteralTables::builder()
            .upstream_strategies(vec!["only"])
            .downstream_strategies(vec!["one"])
            .entry(
                "only",
                "one",
                AttributeVector::new(-3.0, 0.0, 0.0),
                AttributeVector::new(-4.0, 0.0, 0.0),
            )
            .build()
            .unwrap();
        let model = PayoffModel::literal(&tables, PlayerWeights::default()).unwrap();

        let analysis =
            CooperativeAnalyzer::analyze(&model, &CoalitionBaseline::first_strategies(&model))
                .unwrap();
        assert_eq!(analysis.grand_coalition_outcome, Outcome::new("only", "one"));
        assert_eq!(analysis.core.v_grand, -7.0);
    }
}
