//! Strategy labels and per-role strategy sets.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{Role, ValidationError};

/// An opaque strategy label such as "Forest" or "DN".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strategy(String);

impl Strategy {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Strategy {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered, finite set of strategies available to one role.
///
/// Order matters: it drives Cartesian enumeration of outcomes and, by
/// default, the first label is the role's "do-nothing" strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    role: Role,
    strategies: Vec<Strategy>,
}

impl StrategySet {
    /// Creates a strategy set, rejecting empty or duplicated labels.
    pub fn try_new(
        role: Role,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let field = format!("{} strategies", role);
        let strategies: Vec<Strategy> = labels.into_iter().map(|l| Strategy::new(l)).collect();

        if strategies.is_empty() {
            return Err(ValidationError::empty_field(field));
        }

        let mut seen = HashSet::new();
        for strategy in &strategies {
            if strategy.as_str().trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if !seen.insert(strategy.as_str()) {
                return Err(ValidationError::duplicate(field, strategy.as_str()));
            }
        }

        Ok(Self { role, strategies })
    }

    /// Upstream measures: no action, forest maintenance, dam investment, both.
    pub fn upstream_measures() -> Self {
        Self {
            role: Role::Upstream,
            strategies: ["No", "Forest", "Dam", "Both"].map(Strategy::from).to_vec(),
        }
    }

    /// Downstream measures: no action, embankment, house relocation, both.
    pub fn downstream_measures() -> Self {
        Self {
            role: Role::Downstream,
            strategies: ["No", "Embankment", "Relocation", "Both"]
                .map(Strategy::from)
                .to_vec(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Strategy> {
        self.strategies.get(index)
    }

    /// Position of a label within the set.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.strategies.iter().position(|s| s.as_str() == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    /// The first label, used as the default "do-nothing" baseline.
    pub fn first(&self) -> &Strategy {
        &self.strategies[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_keeps_order() {
        let set = StrategySet::try_new(Role::Upstream, ["NP", "PT", "IL"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.index_of("PT"), Some(1));
        assert_eq!(set.first().as_str(), "NP");
    }

    #[test]
    fn try_new_rejects_empty_set() {
        let result = StrategySet::try_new(Role::Downstream, Vec::<String>::new());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn try_new_rejects_blank_label() {
        let result = StrategySet::try_new(Role::Downstream, ["DN", "  "]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let result = StrategySet::try_new(Role::Upstream, ["No", "Dam", "No"]);
        match result {
            Err(ValidationError::Duplicate { value, .. }) => assert_eq!(value, "No"),
            other => panic!("Expected Duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn measure_presets_start_with_no_action() {
        let up = StrategySet::upstream_measures();
        let down = StrategySet::downstream_measures();
        assert_eq!(up.first().as_str(), "No");
        assert_eq!(down.first().as_str(), "No");
        assert!(up.contains("Forest"));
        assert!(down.contains("Relocation"));
        assert_eq!(up.role(), Role::Upstream);
        assert_eq!(down.role(), Role::Downstream);
    }

    #[test]
    fn strategy_serializes_as_plain_string() {
        let json = serde_json::to_string(&Strategy::new("Dam")).unwrap();
        assert_eq!(json, "\"Dam\"");
    }
}
