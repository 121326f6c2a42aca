//! Payoff attributes and per-player attribute weights.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// One dimension of a player's multi-attribute payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Economic,
    Safety,
    Environmental,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Economic,
        Attribute::Safety,
        Attribute::Environmental,
    ];

    /// True when the raw measurement is a cost or a damage, i.e. lower is better.
    pub fn is_cost(&self) -> bool {
        matches!(self, Attribute::Economic | Attribute::Safety)
    }

    /// Converts a raw measurement to the "higher is better" convention.
    pub fn orient(&self, raw: f64) -> f64 {
        if self.is_cost() {
            -raw
        } else {
            raw
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Attribute::Economic => "economic",
            Attribute::Safety => "safety",
            Attribute::Environmental => "environmental",
        };
        write!(f, "{}", s)
    }
}

/// One value per attribute, all in the "higher is better" convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeVector {
    pub economic: f64,
    pub safety: f64,
    pub environmental: f64,
}

impl AttributeVector {
    pub fn new(economic: f64, safety: f64, environmental: f64) -> Self {
        Self {
            economic,
            safety,
            environmental,
        }
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Economic => self.economic,
            Attribute::Safety => self.safety,
            Attribute::Environmental => self.environmental,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: f64) {
        match attribute {
            Attribute::Economic => self.economic = value,
            Attribute::Safety => self.safety = value,
            Attribute::Environmental => self.environmental = value,
        }
    }
}

/// Non-negative importance weights a player gives each attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AttributeVector", into = "AttributeVector")]
pub struct AttributeWeights(AttributeVector);

impl AttributeWeights {
    /// Equal unit weights.
    pub const UNIT: Self = Self(AttributeVector {
        economic: 1.0,
        safety: 1.0,
        environmental: 1.0,
    });

    /// Creates weights, rejecting negative values and an all-zero vector.
    pub fn try_new(economic: f64, safety: f64, environmental: f64) -> Result<Self, ValidationError> {
        let weights = AttributeVector::new(economic, safety, environmental);
        for attribute in Attribute::ALL {
            let w = weights.get(attribute);
            if !w.is_finite() || w < 0.0 {
                return Err(ValidationError::out_of_range(
                    format!("{} weight", attribute),
                    0.0,
                    f64::MAX,
                    w,
                ));
            }
        }
        if economic + safety + environmental <= 0.0 {
            return Err(ValidationError::invalid_format(
                "weights",
                "at least one attribute weight must be positive",
            ));
        }
        Ok(Self(weights))
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.0.get(attribute)
    }

    pub fn sum(&self) -> f64 {
        self.0.economic + self.0.safety + self.0.environmental
    }

    /// Weighted sum, Σ w_i x a_i.
    pub fn linear(&self, values: &AttributeVector) -> f64 {
        Attribute::ALL
            .iter()
            .map(|&a| self.get(a) * values.get(a))
            .sum()
    }

    /// Weighted average, Σ w_i x a_i / Σ w_i.
    pub fn average(&self, values: &AttributeVector) -> f64 {
        self.linear(values) / self.sum()
    }
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<AttributeVector> for AttributeWeights {
    type Error = ValidationError;

    fn try_from(v: AttributeVector) -> Result<Self, Self::Error> {
        Self::try_new(v.economic, v.safety, v.environmental)
    }
}

impl From<AttributeWeights> for AttributeVector {
    fn from(w: AttributeWeights) -> Self {
        w.0
    }
}
