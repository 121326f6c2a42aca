//! Constants of the flood model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Initial state of the basin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasinState {
    pub forest_capacity: f64,
    pub dam_capacity: f64,
    pub embankment_capacity: f64,
    pub houses_at_risk: u32,
    pub ecosystem: f64,
}

impl Default for BasinState {
    fn default() -> Self {
        Self {
            forest_capacity: 100.0,
            dam_capacity: 20.0,
            embankment_capacity: 40.0,
            houses_at_risk: 5000,
            ecosystem: 100.0,
        }
    }
}

/// One capacity-building measure: when it is invested in, how long until it
/// takes effect, and what it costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityMeasure {
    pub investment_year: i32,
    /// Capacity added per unit once effective.
    pub increment: f64,
    pub delay_years: i32,
    /// Uniform jitter applied to the delay, in whole years (±).
    pub delay_jitter: i32,
    /// Capacity is scaled by U(1 - yield_spread, 1 + yield_spread) on maturity.
    pub yield_spread: f64,
    /// Cost per unit of capacity increment.
    pub cost_per_unit: f64,
}

impl CapacityMeasure {
    /// Total cost of investing `amount` units.
    pub fn cost(&self, amount: f64) -> f64 {
        self.cost_per_unit * self.increment * amount
    }
}

/// Relocation of houses out of the flood plain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelocationMeasure {
    pub year: i32,
    pub houses: u32,
    pub cost_per_house: f64,
}

/// Annual rainfall distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallModel {
    pub base_mean: f64,
    /// Added to the mean per year elapsed since the start year.
    pub mean_trend: f64,
    pub std_dev: f64,
    pub extreme_base_probability: f64,
    /// Added to the extreme-event probability per year elapsed.
    pub extreme_probability_trend: f64,
    pub extreme_min: f64,
    pub extreme_max: f64,
}

/// Ecosystem index response to built capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcosystemModel {
    pub forest_factor: f64,
    pub dam_factor: f64,
    pub embankment_factor: f64,
    pub noise_std_dev: f64,
}

/// All constants of the flood simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub start_year: i32,
    pub end_year: i32,
    pub initial: BasinState,
    pub forest: CapacityMeasure,
    pub dam: CapacityMeasure,
    pub embankment: CapacityMeasure,
    pub relocation: RelocationMeasure,
    pub rainfall: RainfallModel,
    pub ecosystem: EcosystemModel,
    /// Damage per unit of rain above threshold, per house at risk.
    pub damage_coefficient: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            start_year: 2025,
            end_year: 2100,
            initial: BasinState::default(),
            forest: CapacityMeasure {
                investment_year: 2025,
                increment: 10.0,
                delay_years: 40,
                delay_jitter: 0,
                yield_spread: 0.0,
                cost_per_unit: 200_000.0,
            },
            dam: CapacityMeasure {
                investment_year: 2030,
                increment: 10.0,
                delay_years: 10,
                delay_jitter: 1,
                yield_spread: 0.2,
                cost_per_unit: 50_000_000.0,
            },
            embankment: CapacityMeasure {
                investment_year: 2035,
                increment: 10.0,
                delay_years: 5,
                delay_jitter: 1,
                yield_spread: 0.2,
                cost_per_unit: 100_000_000.0,
            },
            relocation: RelocationMeasure {
                year: 2040,
                houses: 100,
                cost_per_house: 30_000_000.0,
            },
            rainfall: RainfallModel {
                base_mean: 300.0,
                mean_trend: 1.0,
                std_dev: 50.0,
                extreme_base_probability: 0.10,
                extreme_probability_trend: 0.001,
                extreme_min: 100.0,
                extreme_max: 200.0,
            },
            ecosystem: EcosystemModel {
                forest_factor: 0.2,
                dam_factor: 0.1,
                embankment_factor: 0.05,
                noise_std_dev: 2.0,
            },
            damage_coefficient: 10_000.0,
        }
    }
}

impl SimulationParameters {
    /// Checks the parameters can drive the rainfall and yield distributions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_year < self.start_year {
            return Err(ValidationError::out_of_range(
                "end_year",
                self.start_year as f64,
                f64::MAX,
                self.end_year as f64,
            ));
        }
        for (field, value) in [
            ("rainfall.std_dev", self.rainfall.std_dev),
            ("ecosystem.noise_std_dev", self.ecosystem.noise_std_dev),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
            }
        }
        if !(self.rainfall.extreme_min < self.rainfall.extreme_max) {
            return Err(ValidationError::invalid_format(
                "rainfall.extreme_min",
                "must be below rainfall.extreme_max",
            ));
        }
        for (field, measure) in [
            ("dam", &self.dam),
            ("embankment", &self.embankment),
            ("forest", &self.forest),
        ] {
            if !(0.0..1.0).contains(&measure.yield_spread) {
                return Err(ValidationError::out_of_range(
                    format!("{}.yield_spread", field),
                    0.0,
                    1.0,
                    measure.yield_spread,
                ));
            }
            if measure.delay_jitter < 0 {
                return Err(ValidationError::out_of_range(
                    format!("{}.delay_jitter", field),
                    0.0,
                    f64::MAX,
                    measure.delay_jitter as f64,
                ));
            }
        }
        Ok(())
    }
}
