//! Outcomes (strategy pairs) and the Cartesian outcome space.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, Role, Strategy, StrategySet, ValidationError};

/// One concrete pair of (upstream strategy, downstream strategy) choices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub upstream: Strategy,
    pub downstream: Strategy,
}

impl Outcome {
    pub fn new(upstream: impl Into<String>, downstream: impl Into<String>) -> Self {
        Self {
            upstream: Strategy::new(upstream),
            downstream: Strategy::new(downstream),
        }
    }

    /// The strategy chosen by `role` in this outcome.
    pub fn strategy_of(&self, role: Role) -> &Strategy {
        match role {
            Role::Upstream => &self.upstream,
            Role::Downstream => &self.downstream,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.upstream, self.downstream)
    }
}

/// Index of an outcome inside an [`OutcomeSpace`]: (upstream row, downstream column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub upstream: usize,
    pub downstream: usize,
}

/// The full Cartesian product of the two strategy sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSpace {
    upstream: StrategySet,
    downstream: StrategySet,
}

impl OutcomeSpace {
    /// Creates a space from one set per role.
    pub fn try_new(upstream: StrategySet, downstream: StrategySet) -> Result<Self, ValidationError> {
        if upstream.role() != Role::Upstream {
            return Err(ValidationError::invalid_format(
                "upstream strategies",
                "strategy set belongs to the downstream role",
            ));
        }
        if downstream.role() != Role::Downstream {
            return Err(ValidationError::invalid_format(
                "downstream strategies",
                "strategy set belongs to the upstream role",
            ));
        }
        Ok(Self {
            upstream,
            downstream,
        })
    }

    /// The 4 x 4 space of river basin measures.
    pub fn river_measures() -> Self {
        Self {
            upstream: StrategySet::upstream_measures(),
            downstream: StrategySet::downstream_measures(),
        }
    }

    pub fn strategies(&self, role: Role) -> &StrategySet {
        match role {
            Role::Upstream => &self.upstream,
            Role::Downstream => &self.downstream,
        }
    }

    /// Number of outcomes, |U| x |D|.
    pub fn len(&self) -> usize {
        self.upstream.len() * self.downstream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells in upstream-major, downstream-minor order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.upstream.len()).flat_map(move |u| {
            (0..self.downstream.len()).map(move |d| Cell {
                upstream: u,
                downstream: d,
            })
        })
    }

    /// All outcomes in upstream-major, downstream-minor order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.cells().map(|cell| self.outcome_at(cell)).collect()
    }

    /// Flat position of a cell in enumeration order.
    pub fn position(&self, cell: Cell) -> usize {
        cell.upstream * self.downstream.len() + cell.downstream
    }

    /// The outcome stored at `cell`. Cells must come from this space.
    pub fn outcome_at(&self, cell: Cell) -> Outcome {
        Outcome {
            upstream: self.upstream.get(cell.upstream).cloned().unwrap_or_else(|| {
                panic!("upstream index {} outside strategy set", cell.upstream)
            }),
            downstream: self.downstream.get(cell.downstream).cloned().unwrap_or_else(|| {
                panic!("downstream index {} outside strategy set", cell.downstream)
            }),
        }
    }

    /// Locates an outcome, failing if either label is unknown.
    pub fn locate(&self, outcome: &Outcome) -> Result<Cell, DomainError> {
        let upstream = self
            .upstream
            .index_of(outcome.upstream.as_str())
            .ok_or_else(|| DomainError::unknown_strategy(Role::Upstream, outcome.upstream.as_str()))?;
        let downstream = self
            .downstream
            .index_of(outcome.downstream.as_str())
            .ok_or_else(|| {
                DomainError::unknown_strategy(Role::Downstream, outcome.downstream.as_str())
            })?;
        Ok(Cell {
            upstream,
            downstream,
        })
    }
}
