//! Simulated trial records and their grouping by outcome.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{Outcome, RiskPercentile};

/// Which upstream measures were active in a trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpstreamMeasures {
    pub forest: bool,
    pub dam: bool,
}

impl UpstreamMeasures {
    /// Composite strategy label: Both, Forest, Dam or No.
    pub fn label(&self) -> &'static str {
        match (self.forest, self.dam) {
            (true, true) => "Both",
            (true, false) => "Forest",
            (false, true) => "Dam",
            (false, false) => "No",
        }
    }

    /// Every combination, in the order the measure labels are listed.
    pub fn all() -> [Self; 4] {
        [
            Self { forest: false, dam: false },
            Self { forest: true, dam: false },
            Self { forest: false, dam: true },
            Self { forest: true, dam: true },
        ]
    }
}

/// Which downstream measures were active in a trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownstreamMeasures {
    pub embankment: bool,
    pub relocation: bool,
}

impl DownstreamMeasures {
    /// Composite strategy label: Both, Embankment, Relocation or No.
    pub fn label(&self) -> &'static str {
        match (self.embankment, self.relocation) {
            (true, true) => "Both",
            (true, false) => "Embankment",
            (false, true) => "Relocation",
            (false, false) => "No",
        }
    }

    pub fn all() -> [Self; 4] {
        [
            Self { embankment: false, relocation: false },
            Self { embankment: true, relocation: false },
            Self { embankment: false, relocation: true },
            Self { embankment: true, relocation: true },
        ]
    }
}

/// The four quantities measured in every trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    UpstreamCost,
    DownstreamCost,
    CumulativeDamage,
    FinalEcosystem,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::UpstreamCost,
        Measurement::DownstreamCost,
        Measurement::CumulativeDamage,
        Measurement::FinalEcosystem,
    ];

    /// Column name used in trial files.
    pub fn column(&self) -> &'static str {
        match self {
            Measurement::UpstreamCost => "upstream_cost",
            Measurement::DownstreamCost => "downstream_cost",
            Measurement::CumulativeDamage => "cumulative_damage",
            Measurement::FinalEcosystem => "final_ecosystem",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One simulated run of a measure combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub upstream: UpstreamMeasures,
    pub downstream: DownstreamMeasures,
    pub run: u32,
    pub upstream_cost: f64,
    pub downstream_cost: f64,
    pub cumulative_damage: f64,
    pub final_ecosystem: f64,
}

impl TrialRecord {
    /// The strategy pair this trial belongs to.
    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.upstream.label(), self.downstream.label())
    }

    pub fn measurement(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::UpstreamCost => self.upstream_cost,
            Measurement::DownstreamCost => self.downstream_cost,
            Measurement::CumulativeDamage => self.cumulative_damage,
            Measurement::FinalEcosystem => self.final_ecosystem,
        }
    }
}

/// Per-outcome sample sequences, one per measurement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    samples: HashMap<Measurement, Vec<f64>>,
}

impl SampleSeries {
    pub fn push(&mut self, measurement: Measurement, value: f64) {
        self.samples.entry(measurement).or_default().push(value);
    }

    pub fn samples(&self, measurement: Measurement) -> &[f64] {
        self.samples
            .get(&measurement)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Percentile of one measurement; `None` when there are no samples.
    pub fn percentile(&self, measurement: Measurement, p: RiskPercentile) -> Option<f64> {
        p.of(self.samples(measurement))
    }
}

/// Trial samples grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialSamples {
    by_outcome: HashMap<Outcome, SampleSeries>,
}

impl TrialSamples {
    /// Groups records by their composite strategy labels.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TrialRecord>) -> Self {
        let mut samples = Self::default();
        for record in records {
            samples.push(record);
        }
        samples
    }

    pub fn push(&mut self, record: &TrialRecord) {
        let series = self.by_outcome.entry(record.outcome()).or_default();
        for measurement in Measurement::ALL {
            series.push(measurement, record.measurement(measurement));
        }
    }

    /// Adds raw samples for a single measurement of an outcome.
    pub fn extend(
        &mut self,
        outcome: Outcome,
        measurement: Measurement,
        values: impl IntoIterator<Item = f64>,
    ) {
        let series = self.by_outcome.entry(outcome).or_default();
        for value in values {
            series.push(measurement, value);
        }
    }

    pub fn series(&self, outcome: &Outcome) -> Option<&SampleSeries> {
        self.by_outcome.get(outcome)
    }

    /// Number of outcomes with at least one sample.
    pub fn outcome_count(&self) -> usize {
        self.by_outcome.len()
    }
}
