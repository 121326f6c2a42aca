//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod analysis;

pub use analysis::{PayoffInput, RunGameAnalysisCommand, RunGameAnalysisHandler};
