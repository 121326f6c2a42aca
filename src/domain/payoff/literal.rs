//! Literal per-attribute payoff tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{
    AttributeVector, DomainError, Outcome, OutcomeSpace, Role, StrategySet, ValidationError,
};

/// Attribute values of one outcome as seen by each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeAttributes {
    pub upstream: AttributeVector,
    pub downstream: AttributeVector,
}

impl OutcomeAttributes {
    pub fn for_role(&self, role: Role) -> &AttributeVector {
        match role {
            Role::Upstream => &self.upstream,
            Role::Downstream => &self.downstream,
        }
    }
}

/// One row of a literal tables document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralEntry {
    pub upstream: String,
    pub downstream: String,
    pub upstream_attributes: AttributeVector,
    pub downstream_attributes: AttributeVector,
}

/// Serialized form of literal tables: both strategy lists plus one entry per outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralTablesDocument {
    pub upstream_strategies: Vec<String>,
    pub downstream_strategies: Vec<String>,
    pub entries: Vec<LiteralEntry>,
}

/// Environmental, economic and safety values per outcome, per player.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralTables {
    space: OutcomeSpace,
    cells: HashMap<Outcome, OutcomeAttributes>,
}

impl LiteralTables {
    /// Creates a builder for constructing literal tables.
    pub fn builder() -> LiteralTablesBuilder {
        LiteralTablesBuilder::new()
    }

    pub fn space(&self) -> &OutcomeSpace {
        &self.space
    }

    pub fn get(&self, outcome: &Outcome) -> Option<&OutcomeAttributes> {
        self.cells.get(outcome)
    }

    /// Outcomes of the space that have no entry, in enumeration order.
    pub fn missing_outcomes(&self) -> Vec<Outcome> {
        self.space
            .outcomes()
            .into_iter()
            .filter(|o| !self.cells.contains_key(o))
            .collect()
    }

    /// Builds tables from their serialized form.
    pub fn from_document(doc: LiteralTablesDocument) -> Result<Self, DomainError> {
        doc.entries
            .into_iter()
            .fold(
                Self::builder()
                    .upstream_strategies(doc.upstream_strategies)
                    .downstream_strategies(doc.downstream_strategies),
                |builder, e| {
                    builder.entry(
                        e.upstream,
                        e.downstream,
                        e.upstream_attributes,
                        e.downstream_attributes,
                    )
                },
            )
            .build()
    }

    /// Serialized form, entries in enumeration order.
    pub fn to_document(&self) -> LiteralTablesDocument {
        let labels = |role: Role| -> Vec<String> {
            self.space
                .strategies(role)
                .iter()
                .map(|s| s.to_string())
                .collect()
        };
        LiteralTablesDocument {
            upstream_strategies: labels(Role::Upstream),
            downstream_strategies: labels(Role::Downstream),
            entries: self
                .space
                .outcomes()
                .into_iter()
                .filter_map(|o| {
                    self.cells.get(&o).map(|attrs| LiteralEntry {
                        upstream: o.upstream.to_string(),
                        downstream: o.downstream.to_string(),
                        upstream_attributes: attrs.upstream,
                        downstream_attributes: attrs.downstream,
                    })
                })
                .collect(),
        }
    }

    /// The three-by-three planting/levee/relocation example.
    ///
    /// Upstream: NP (no planting), PT (plant trees), IL (invest in levee).
    /// Downstream: DN (do nothing), IL (invest in levee), RE (relocation).
    /// Values are (economic, safety, environmental).
    pub fn river_example() -> Self {
        #[rustfmt::skip]
        let rows: [(&str, &str, [f64; 3], [f64; 3]); 9] = [
            ("NP", "DN", [ 2.0, 0.0, -1.0], [ 0.0, -1.0,  0.0]),
            ("NP", "IL", [ 1.0, 1.0, -2.0], [-1.0,  2.0, -1.0]),
            ("NP", "RE", [ 2.0, 0.0, -1.0], [-2.0,  3.0,  0.0]),
            ("PT", "DN", [-1.0, 1.0,  2.0], [ 0.0,  0.0,  1.0]),
            ("PT", "IL", [-2.0, 2.0,  1.0], [-1.0,  2.0,  0.0]),
            ("PT", "RE", [-1.0, 1.0,  2.0], [-2.0,  3.0,  1.0]),
            ("IL", "DN", [-1.0, 2.0, -2.0], [-1.0,  1.0, -1.0]),
            ("IL", "IL", [-2.0, 3.0, -3.0], [-2.0,  3.0, -2.0]),
            ("IL", "RE", [-1.0, 2.0, -2.0], [-3.0,  4.0, -1.0]),
        ];

        let space = OutcomeSpace::try_new(
            StrategySet::try_new(Role::Upstream, ["NP", "PT", "IL"])
                .unwrap_or_else(|e| panic!("example upstream strategies: {}", e)),
            StrategySet::try_new(Role::Downstream, ["DN", "IL", "RE"])
                .unwrap_or_else(|e| panic!("example downstream strategies: {}", e)),
        )
        .unwrap_or_else(|e| panic!("example outcome space: {}", e));

        let cells = rows
            .iter()
            .map(|(u, d, up, down)| {
                (
                    Outcome::new(*u, *d),
                    OutcomeAttributes {
                        upstream: AttributeVector::new(up[0], up[1], up[2]),
                        downstream: AttributeVector::new(down[0], down[1], down[2]),
                    },
                )
            })
            .collect();

        Self { space, cells }
    }
}

/// Builder for constructing LiteralTables instances.
#[derive(Debug, Default)]
pub struct LiteralTablesBuilder {
    upstream: Vec<String>,
    downstream: Vec<String>,
    entries: Vec<(Outcome, OutcomeAttributes)>,
}

impl LiteralTablesBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream strategy labels.
    pub fn upstream_strategies(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.upstream = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the downstream strategy labels.
    pub fn downstream_strategies(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.downstream = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds the attribute values of one outcome.
    pub fn entry(
        mut self,
        upstream: impl Into<String>,
        downstream: impl Into<String>,
        upstream_attributes: AttributeVector,
        downstream_attributes: AttributeVector,
    ) -> Self {
        self.entries.push((
            Outcome::new(upstream, downstream),
            OutcomeAttributes {
                upstream: upstream_attributes,
                downstream: downstream_attributes,
            },
        ));
        self
    }

    /// Builds the tables, rejecting invalid strategy sets, entries for unknown
    /// strategies and outcomes listed more than once.
    ///
    /// Completeness is not required here; the payoff model checks it.
    pub fn build(self) -> Result<LiteralTables, DomainError> {
        let space = OutcomeSpace::try_new(
            StrategySet::try_new(Role::Upstream, self.upstream)?,
            StrategySet::try_new(Role::Downstream, self.downstream)?,
        )?;

        let mut cells = HashMap::new();
        for (outcome, attributes) in self.entries {
            space.locate(&outcome)?;
            if cells.contains_key(&outcome) {
                return Err(ValidationError::duplicate("entries", outcome.to_string()).into());
            }
            cells.insert(outcome, attributes);
        }

        Ok(LiteralTables { space, cells })
    }
}
