//! Risk percentile value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// The percentile of a trial distribution a player plans against.
///
/// Costs and damage are read at this percentile: 50 plans for the typical
/// run, while high values plan for the expensive tail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskPercentile(f64);

impl RiskPercentile {
    /// The median.
    pub const MEDIAN: Self = Self(50.0);

    /// Creates a percentile, returning error if outside [0, 100].
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentile", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Linear-interpolated percentile of `samples`; `None` when empty.
    ///
    /// Uses rank = p/100 x (n - 1) over the sorted samples and interpolates
    /// between the two closest ranks.
    pub fn of(&self, samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let rank = self.as_fraction() * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let weight = rank - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
    }
}

impl Default for RiskPercentile {
    fn default() -> Self {
        Self::MEDIAN
    }
}

impl TryFrom<f64> for RiskPercentile {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RiskPercentile> for f64 {
    fn from(p: RiskPercentile) -> Self {
        p.0
    }
}

impl fmt::Display for RiskPercentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}
