//! One simulated run of the basin from start year to end year.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use super::{ActionKind, CapacityMeasure, PolicyAction, SimulationParameters};

/// Totals of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub upstream_cost: f64,
    pub downstream_cost: f64,
    pub cumulative_damage: f64,
    pub final_ecosystem: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capacity {
    Forest,
    Dam,
    Embankment,
}

/// An investment waiting to take effect.
#[derive(Debug, Clone, Copy)]
struct Pending {
    effective_year: i32,
    capacity: Capacity,
    amount: f64,
}

/// Mutable state of the basin during a run.
#[derive(Debug, Clone)]
struct Basin {
    forest: f64,
    dam: f64,
    embankment: f64,
    houses_at_risk: u32,
    ecosystem: f64,
}

impl Basin {
    fn threshold(&self) -> f64 {
        self.forest + self.dam + self.embankment
    }
}

/// Simulates one run of `actions`.
///
/// Each year, in order:
/// 1. Investments whose delay has elapsed add capacity
/// 2. This year's actions are paid for and scheduled
/// 3. Rainfall is drawn; rain above forest + dam + embankment capacity
///    causes damage proportional to the excess and to houses at risk
/// 4. The ecosystem index is recomputed from built capacity plus noise
pub fn simulate_run<R: Rng>(
    params: &SimulationParameters,
    actions: &[PolicyAction],
    rng: &mut R,
) -> RunOutcome {
    let initial = params.initial;
    let mut basin = Basin {
        forest: initial.forest_capacity,
        dam: initial.dam_capacity,
        embankment: initial.embankment_capacity,
        houses_at_risk: initial.houses_at_risk,
        ecosystem: initial.ecosystem,
    };
    let mut pending: Vec<Pending> = Vec::new();
    let mut upstream_cost = 0.0;
    let mut downstream_cost = 0.0;
    let mut cumulative_damage = 0.0;

    for year in params.start_year..=params.end_year {
        let (due, waiting): (Vec<Pending>, Vec<Pending>) =
            pending.into_iter().partition(|p| year >= p.effective_year);
        pending = waiting;
        for p in due {
            let measure = measure_of(params, p.capacity);
            let added = measure.increment * p.amount * yield_multiplier(measure, rng);
            match p.capacity {
                Capacity::Forest => basin.forest += added,
                Capacity::Dam => basin.dam += added,
                Capacity::Embankment => basin.embankment += added,
            }
        }

        for action in actions.iter().filter(|a| a.year == year) {
            match action.kind {
                ActionKind::Forest { amount } => {
                    upstream_cost += params.forest.cost(amount);
                    pending.push(schedule(params, Capacity::Forest, year, amount, rng));
                }
                ActionKind::Dam { amount } => {
                    upstream_cost += params.dam.cost(amount);
                    pending.push(schedule(params, Capacity::Dam, year, amount, rng));
                }
                ActionKind::Embankment { amount } => {
                    downstream_cost += params.embankment.cost(amount);
                    pending.push(schedule(params, Capacity::Embankment, year, amount, rng));
                }
                ActionKind::Relocate { houses } => {
                    basin.houses_at_risk = basin.houses_at_risk.saturating_sub(houses);
                    downstream_cost += params.relocation.cost_per_house * f64::from(houses);
                }
            }
        }

        let rain = rainfall(params, year, rng);
        let threshold = basin.threshold();
        if rain > threshold {
            cumulative_damage +=
                (rain - threshold) * params.damage_coefficient * f64::from(basin.houses_at_risk);
        }

        let eco = params.ecosystem;
        let noise: f64 = rng.sample(StandardNormal);
        basin.ecosystem = initial.ecosystem
            + (basin.forest - initial.forest_capacity) * eco.forest_factor
            - basin.dam * eco.dam_factor
            - (basin.embankment - initial.embankment_capacity) * eco.embankment_factor
            + noise * eco.noise_std_dev;
    }

    RunOutcome {
        upstream_cost,
        downstream_cost,
        cumulative_damage,
        final_ecosystem: basin.ecosystem,
    }
}

/// Annual rainfall: trending normal plus an occasional extreme event, floored at zero.
fn rainfall<R: Rng>(params: &SimulationParameters, year: i32, rng: &mut R) -> f64 {
    let model = params.rainfall;
    let elapsed = f64::from(year - params.start_year);

    let z: f64 = rng.sample(StandardNormal);
    let mut rain = model.base_mean + model.mean_trend * elapsed + z * model.std_dev;

    let extreme_probability =
        model.extreme_base_probability + model.extreme_probability_trend * elapsed;
    if rng.random::<f64>() < extreme_probability {
        rain += rng.random_range(model.extreme_min..model.extreme_max);
    }
    rain.max(0.0)
}

fn measure_of(params: &SimulationParameters, capacity: Capacity) -> &CapacityMeasure {
    match capacity {
        Capacity::Forest => &params.forest,
        Capacity::Dam => &params.dam,
        Capacity::Embankment => &params.embankment,
    }
}

fn schedule<R: Rng>(
    params: &SimulationParameters,
    capacity: Capacity,
    year: i32,
    amount: f64,
    rng: &mut R,
) -> Pending {
    let measure = measure_of(params, capacity);
    let jitter = if measure.delay_jitter > 0 {
        rng.random_range(-measure.delay_jitter..=measure.delay_jitter)
    } else {
        0
    };
    Pending {
        effective_year: year + measure.delay_years + jitter,
        capacity,
        amount,
    }
}

fn yield_multiplier<R: Rng>(measure: &CapacityMeasure, rng: &mut R) -> f64 {
    if measure.yield_spread > 0.0 {
        rng.random_range(1.0 - measure.yield_spread..1.0 + measure.yield_spread)
    } else {
        1.0
    }
}
