//! Analysis configuration: risk percentiles and coalition baselines

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::RiskPercentile;
use crate::domain::payoff::RiskProfile;

/// How outcomes are summarized and which strategies singleton coalitions face
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Percentile of upstream's trial samples (0-100)
    #[serde(default = "default_percentile")]
    pub upstream_percentile: f64,

    /// Percentile of downstream's trial samples (0-100)
    #[serde(default = "default_percentile")]
    pub downstream_percentile: f64,

    /// Strategy upstream plays when downstream stands alone.
    /// Defaults to the first upstream strategy.
    pub upstream_baseline: Option<String>,

    /// Strategy downstream plays when upstream stands alone.
    /// Defaults to the first downstream strategy.
    pub downstream_baseline: Option<String>,
}

impl AnalysisConfig {
    /// Percentiles as a risk profile
    pub fn risk_profile(&self) -> Result<RiskProfile, ValidationError> {
        let percentile = |role: &'static str, value: f64| {
            RiskPercentile::try_new(value)
                .map_err(|_| ValidationError::InvalidPercentile { role, value })
        };
        Ok(RiskProfile::new(
            percentile("upstream", self.upstream_percentile)?,
            percentile("downstream", self.downstream_percentile)?,
        ))
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.risk_profile()?;
        for (role, baseline) in [
            ("upstream", &self.upstream_baseline),
            ("downstream", &self.downstream_baseline),
        ] {
            if baseline.as_deref().is_some_and(|b| b.trim().is_empty()) {
                return Err(ValidationError::BlankBaseline { role });
            }
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            upstream_percentile: default_percentile(),
            downstream_percentile: default_percentile(),
            upstream_baseline: None,
            downstream_baseline: None,
        }
    }
}

fn default_percentile() -> f64 {
    RiskPercentile::MEDIAN.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.upstream_percentile, 50.0);
        assert_eq!(config.downstream_percentile, 50.0);
        assert!(config.upstream_baseline.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_percentile() {
        let config = AnalysisConfig {
            downstream_percentile: 101.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPercentile {
                role: "downstream",
                value: 101.0
            })
        );
    }

    #[test]
    fn test_risk_profile_uses_both_percentiles() {
        let config = AnalysisConfig {
            upstream_percentile: 5.0,
            downstream_percentile: 99.0,
            ..Default::default()
        };
        let profile = config.risk_profile().unwrap();
        assert_eq!(profile.upstream.value(), 5.0);
        assert_eq!(profile.downstream.value(), 99.0);
    }

    #[test]
    fn test_blank_baseline_rejected() {
        let config = AnalysisConfig {
            upstream_baseline: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::BlankBaseline { role: "upstream" })
        );
    }
}
