//! Application layer - Commands and Handlers.
//!
//! This layer loads inputs through ports, builds the payoff model and hands
//! it to the domain analyzers.

pub mod handlers;

pub use handlers::{PayoffInput, RunGameAnalysisCommand, RunGameAnalysisHandler};
