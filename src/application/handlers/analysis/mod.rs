//! Analysis handlers.

mod run_game_analysis;

pub use run_game_analysis::{PayoffInput, RunGameAnalysisCommand, RunGameAnalysisHandler};
