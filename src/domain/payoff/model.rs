//! Payoff Model - composite payoffs for every outcome, for both players.

use serde::{Deserialize, Serialize};

use super::normalization::MinMax;
use super::{LiteralTables, Measurement, OutcomeAttributes, PlayerWeights, RiskProfile, TrialSamples};
use crate::domain::foundation::{
    Attribute, AttributeVector, Cell, DomainError, ErrorCode, Outcome, OutcomeSpace, Role,
};

/// How the payoffs of a model were derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayoffBasis {
    /// Percentile statistics of trial samples, min-max normalized, weighted average.
    Empirical { risk: RiskProfile },
    /// Literal attribute tables, weighted sum.
    Literal,
}

/// Composite payoffs of one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPair {
    pub upstream: f64,
    pub downstream: f64,
}

impl PayoffPair {
    pub fn for_role(&self, role: Role) -> f64 {
        match role {
            Role::Upstream => self.upstream,
            Role::Downstream => self.downstream,
        }
    }

    /// Sum of both players' payoffs.
    pub fn total(&self) -> f64 {
        self.upstream + self.downstream
    }
}

/// Immutable mapping from outcome to the payoff pair of both players.
///
/// Every outcome of the space has a payoff for both roles. Values are stored
/// densely in enumeration order, so analyzers address them by [`Cell`].
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffModel {
    space: OutcomeSpace,
    basis: PayoffBasis,
    weights: PlayerWeights,
    payoffs: Vec<PayoffPair>,
    attributes: Vec<OutcomeAttributes>,
}

impl PayoffModel {
    /// Builds a model from trial samples.
    ///
    /// Each role reads its percentile of the samples into three raw attributes:
    /// economic = -own cost, safety = -cumulative damage, environmental =
    /// final ecosystem. Each attribute is then min-max normalized across the
    /// whole space and combined by weighted average.
    ///
    /// # Errors
    /// `ErrorCode::MissingData` if any outcome lacks samples for a measurement.
    pub fn empirical(
        space: OutcomeSpace,
        samples: &TrialSamples,
        risk: RiskProfile,
        weights: PlayerWeights,
    ) -> Result<Self, DomainError> {
        let mut raw = Vec::with_capacity(space.len());
        for cell in space.cells() {
            let outcome = space.outcome_at(cell);
            let series = samples
                .series(&outcome)
                .ok_or_else(|| DomainError::missing_data(&outcome, Measurement::ALL[0]))?;

            let read = |measurement: Measurement, role: Role| {
                series
                    .percentile(measurement, risk.for_role(role))
                    .ok_or_else(|| DomainError::missing_data(&outcome, measurement))
            };

            let mut attributes = OutcomeAttributes::default();
            for role in Role::ALL {
                let cost = read(own_cost(role), role)?;
                let damage = read(Measurement::CumulativeDamage, role)?;
                let ecosystem = read(Measurement::FinalEcosystem, role)?;
                *attributes.for_role_mut(role) = AttributeVector::new(
                    Attribute::Economic.orient(cost),
                    Attribute::Safety.orient(damage),
                    Attribute::Environmental.orient(ecosystem),
                );
            }
            raw.push(attributes);
        }

        let normalized = normalize(&raw);
        let payoffs = normalized
            .iter()
            .map(|attrs| PayoffPair {
                upstream: weights.upstream.average(&attrs.upstream),
                downstream: weights.downstream.average(&attrs.downstream),
            })
            .collect();

        Ok(Self {
            space,
            basis: PayoffBasis::Empirical { risk },
            weights,
            payoffs,
            attributes: normalized,
        })
    }

    /// Builds a model from literal attribute tables: payoff = Σ weight x attribute.
    ///
    /// # Errors
    /// `ErrorCode::IncompleteTable` if any outcome of the tables' space has no entry.
    pub fn literal(tables: &LiteralTables, weights: PlayerWeights) -> Result<Self, DomainError> {
        let missing = tables.missing_outcomes();
        if !missing.is_empty() {
            let listed: Vec<String> = missing.iter().map(|o| o.to_string()).collect();
            return Err(DomainError::new(
                ErrorCode::IncompleteTable,
                format!("Literal tables have no values for {}", listed.join(", ")),
            )
            .with_detail("missing", listed.len().to_string()));
        }

        let space = tables.space().clone();
        let attributes: Vec<OutcomeAttributes> = space
            .outcomes()
            .iter()
            .filter_map(|o| tables.get(o).copied())
            .collect();
        let payoffs = attributes
            .iter()
            .map(|attrs| PayoffPair {
                upstream: weights.upstream.linear(&attrs.upstream),
                downstream: weights.downstream.linear(&attrs.downstream),
            })
            .collect();

        Ok(Self {
            space,
            basis: PayoffBasis::Literal,
            weights,
            payoffs,
            attributes,
        })
    }

    pub fn space(&self) -> &OutcomeSpace {
        &self.space
    }

    pub fn basis(&self) -> PayoffBasis {
        self.basis
    }

    pub fn weights(&self) -> &PlayerWeights {
        &self.weights
    }

    /// Both payoffs at a cell of this model's space.
    pub fn payoffs_at(&self, cell: Cell) -> PayoffPair {
        self.payoffs[self.space.position(cell)]
    }

    /// One role's payoff at a cell of this model's space.
    pub fn payoff_at(&self, role: Role, cell: Cell) -> f64 {
        self.payoffs_at(cell).for_role(role)
    }

    /// One role's payoff for an outcome.
    ///
    /// # Errors
    /// `ErrorCode::UnknownStrategy` if the outcome is not in the space.
    pub fn payoff(&self, role: Role, outcome: &Outcome) -> Result<f64, DomainError> {
        Ok(self.payoff_at(role, self.space.locate(outcome)?))
    }

    /// Attribute values behind a role's payoff: normalized for the empirical
    /// basis, raw for the literal basis.
    pub fn attributes(&self, role: Role, outcome: &Outcome) -> Result<&AttributeVector, DomainError> {
        let cell = self.space.locate(outcome)?;
        Ok(self.attributes[self.space.position(cell)].for_role(role))
    }

    /// Every outcome with its payoffs, in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (Outcome, PayoffPair)> + '_ {
        self.space
            .cells()
            .map(move |cell| (self.space.outcome_at(cell), self.payoffs_at(cell)))
    }
}

/// The cost measurement each role bears.
fn own_cost(role: Role) -> Measurement {
    match role {
        Role::Upstream => Measurement::UpstreamCost,
        Role::Downstream => Measurement::DownstreamCost,
    }
}

/// Min-max normalizes every (role, attribute) column across all outcomes.
fn normalize(raw: &[OutcomeAttributes]) -> Vec<OutcomeAttributes> {
    let mut normalized = raw.to_vec();
    for role in Role::ALL {
        for attribute in Attribute::ALL {
            let Some(range) = MinMax::of(raw.iter().map(|a| a.for_role(role).get(attribute))) else {
                continue;
            };
            for (out, src) in normalized.iter_mut().zip(raw) {
                let value = range.normalize(src.for_role(role).get(attribute));
                out.for_role_mut(role).set(attribute, value);
            }
        }
    }
    normalized
}

impl OutcomeAttributes {
    fn for_role_mut(&mut self, role: Role) -> &mut AttributeVector {
        match role {
            Role::Upstream => &mut self.upstream,
            Role::Downstream => &mut self.downstream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AttributeWeights, RiskPercentile, StrategySet};

    fn example_model() -> PayoffModel {
        PayoffModel::literal(&LiteralTables::river_example(), PlayerWeights::default()).unwrap()
    }

    fn two_by_two() -> OutcomeSpace {
        OutcomeSpace::try_new(
            StrategySet::try_new(Role::Upstream, ["No", "Forest"]).unwrap(),
            StrategySet::try_new(Role::Downstream, ["No", "Embankment"]).unwrap(),
        )
        .unwrap()
    }

    /// Samples where outcome i has costs/damage i and ecosystem 10 - i.
    fn graded_samples(space: &OutcomeSpace) -> TrialSamples {
        let mut samples = TrialSamples::default();
        for (i, outcome) in space.outcomes().into_iter().enumerate() {
            let v = i as f64;
            samples.extend(outcome.clone(), Measurement::UpstreamCost, [v, v]);
            samples.extend(outcome.clone(), Measurement::DownstreamCost, [v]);
            samples.extend(outcome.clone(), Measurement::CumulativeDamage, [v]);
            samples.extend(outcome, Measurement::FinalEcosystem, [10.0 - v]);
        }
        samples
    }

    #[test]
    fn literal_pt_re_payoffs() {
        let model = example_model();
        let pt_re = Outcome::new("PT", "RE");
        assert_eq!(model.payoff(Role::Upstream, &pt_re).unwrap(), 2.0);
        assert_eq!(model.payoff(Role::Downstream, &pt_re).unwrap(), 2.0);
    }

    #[test]
    fn literal_weights_scale_attributes() {
        let weights = PlayerWeights::new(
            AttributeWeights::try_new(2.0, 0.0, 1.0).unwrap(),
            AttributeWeights::UNIT,
        );
        let model = PayoffModel::literal(&LiteralTables::river_example(), weights).unwrap();
        // PT,RE upstream: 2 x (-1) + 0 x 1 + 1 x 2
        assert_eq!(model.payoff(Role::Upstream, &Outcome::new("PT", "RE")).unwrap(), 0.0);
    }

    #[test]
    fn literal_rejects_incomplete_tables() {
        let tables = LiteralTables::builder()
            .upstream_strategies(vec!["A", "B"])
            .downstream_strategies(vec!["X"])
            .entry("A", "X", AttributeVector::default(), AttributeVector::default())
            .build()
            .unwrap();
        let err = PayoffModel::literal(&tables, PlayerWeights::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteTable);
        assert!(err.message.contains("(B, X)"));
    }

    #[test]
    fn payoff_rejects_unknown_outcome() {
        let err = example_model()
            .payoff(Role::Upstream, &Outcome::new("ZZ", "DN"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStrategy);
    }

    #[test]
    fn entries_follow_enumeration_order() {
        let model = example_model();
        let outcomes: Vec<_> = model.entries().map(|(o, _)| o).collect();
        assert_eq!(outcomes, model.space().outcomes());
    }

    #[test]
    fn empirical_normalizes_costs_inverted_and_ecosystem_direct() {
        let space = two_by_two();
        let samples = graded_samples(&space);
        let model = PayoffModel::empirical(
            space,
            &samples,
            RiskProfile::default(),
            PlayerWeights::default(),
        )
        .unwrap();

        // Outcome 0 is cheapest, safest and greenest.
        let best = Outcome::new("No", "No");
        let worst = Outcome::new("Forest", "Embankment");
        assert_eq!(
            *model.attributes(Role::Upstream, &best).unwrap(),
            AttributeVector::new(1.0, 1.0, 1.0)
        );
        assert_eq!(
            *model.attributes(Role::Downstream, &worst).unwrap(),
            AttributeVector::new(0.0, 0.0, 0.0)
        );
        assert_eq!(model.payoff(Role::Upstream, &best).unwrap(), 1.0);
        assert_eq!(model.payoff(Role::Downstream, &worst).unwrap(), 0.0);
    }

    #[test]
    fn empirical_degenerate_attribute_is_one_half() {
        let space = two_by_two();
        let mut samples = TrialSamples::default();
        for outcome in space.outcomes() {
            for m in Measurement::ALL {
                samples.extend(outcome.clone(), m, [5.0]);
            }
        }
        let model =
            PayoffModel::empirical(space, &samples, RiskProfile::default(), PlayerWeights::default())
                .unwrap();

        for (_, pair) in model.entries() {
            assert_eq!(pair.upstream, 0.5);
            assert_eq!(pair.downstream, 0.5);
        }
    }

    #[test]
    fn empirical_uses_each_roles_percentile() {
        let space = OutcomeSpace::try_new(
            StrategySet::try_new(Role::Upstream, ["No", "Dam"]).unwrap(),
            StrategySet::try_new(Role::Downstream, ["No"]).unwrap(),
        )
        .unwrap();
        let mut samples = TrialSamples::default();
        // "No": narrow costs; "Dam": wide spread, cheap median, expensive tail.
        for (label, costs) in [("No", [5.0, 5.0, 5.0]), ("Dam", [0.0, 1.0, 100.0])] {
            let outcome = Outcome::new(label, "No");
            samples.extend(outcome.clone(), Measurement::UpstreamCost, costs);
            samples.extend(outcome.clone(), Measurement::DownstreamCost, costs);
            samples.extend(outcome.clone(), Measurement::CumulativeDamage, [0.0]);
            samples.extend(outcome, Measurement::FinalEcosystem, [0.0]);
        }
        let risk = RiskProfile::new(
            RiskPercentile::MEDIAN,
            RiskPercentile::try_new(100.0).unwrap(),
        );
        let weights = PlayerWeights::new(
            AttributeWeights::try_new(1.0, 0.0, 0.0).unwrap(),
            AttributeWeights::try_new(1.0, 0.0, 0.0).unwrap(),
        );
        let model = PayoffModel::empirical(space, &samples, risk, weights).unwrap();

        let dam = Outcome::new("Dam", "No");
        // Median reader prefers the dam, tail reader avoids it.
        assert_eq!(model.payoff(Role::Upstream, &dam).unwrap(), 1.0);
        assert_eq!(model.payoff(Role::Downstream, &dam).unwrap(), 0.0);
    }

    /// Copies `full`, skipping the (outcome, measurement) pairs `skip` rejects.
    fn without(
        space: &OutcomeSpace,
        full: &TrialSamples,
        skip: impl Fn(&Outcome, Measurement) -> bool,
    ) -> TrialSamples {
        let mut partial = TrialSamples::default();
        for outcome in space.outcomes() {
            for m in Measurement::ALL {
                if skip(&outcome, m) {
                    continue;
                }
                let values = full.series(&outcome).unwrap().samples(m).to_vec();
                partial.extend(outcome.clone(), m, values);
            }
        }
        partial
    }

    #[test]
    fn empirical_rejects_missing_outcome() {
        let space = two_by_two();
        let gone = Outcome::new("Forest", "Embankment");
        let samples = without(&space, &graded_samples(&space), |o, _| *o == gone);

        let err =
            PayoffModel::empirical(space, &samples, RiskProfile::default(), PlayerWeights::default())
                .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingData);
        assert_eq!(
            err.details.get("outcome"),
            Some(&"(Forest, Embankment)".to_string())
        );
    }

    #[test]
    fn empirical_rejects_missing_measurement() {
        let space = two_by_two();
        let forest = Outcome::new("Forest", "No");
        let samples = without(&space, &graded_samples(&space), |o, m| {
            *o == forest && m == Measurement::FinalEcosystem
        });

        let err =
            PayoffModel::empirical(space, &samples, RiskProfile::default(), PlayerWeights::default())
                .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingData);
        assert_eq!(
            err.details.get("measurement"),
            Some(&"final_ecosystem".to_string())
        );
    }
}
