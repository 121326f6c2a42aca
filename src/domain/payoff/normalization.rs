//! Min-max normalization of attributes across the outcome space.

/// Observed range of one attribute across every outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Range of `values`; `None` for an empty input.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| {
            Some(match range {
                None => MinMax { min: v, max: v },
                Some(MinMax { min, max }) => MinMax {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }

    /// Scales `value` into [0, 1]. A degenerate range maps everything to 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.5;
        }
        (value - self.min) / (self.max - self.min)
    }
}
