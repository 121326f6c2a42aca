//! Payoff Module - composite payoffs over the outcome space.
//!
//! A [`PayoffModel`] is built once, through one of two paths, and is
//! read-only afterwards:
//!
//! - *Empirical*: [`TrialSamples`] reduced at each player's
//!   [`RiskPercentile`](crate::domain::foundation::RiskPercentile),
//!   min-max normalized, then combined by weighted average.
//! - *Literal*: [`LiteralTables`] combined by weighted sum.

mod literal;
mod model;
mod normalization;
mod profile;
mod trials;

pub use literal::{
    LiteralEntry, LiteralTables, LiteralTablesBuilder, LiteralTablesDocument, OutcomeAttributes,
};
pub use model::{PayoffBasis, PayoffModel, PayoffPair};
pub use normalization::MinMax;
pub use profile::{PlayerWeights, RiskProfile};
pub use trials::{
    DownstreamMeasures, Measurement, SampleSeries, TrialRecord, TrialSamples, UpstreamMeasures,
};
