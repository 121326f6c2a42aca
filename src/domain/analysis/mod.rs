//! Analysis Module - Pure domain services for game analysis.
//!
//! Stateless functions over an immutable [`PayoffModel`](crate::domain::payoff::PayoffModel).
//!
//! # Components
//!
//! - `EquilibriumAnalyzer` - Pure-strategy Nash equilibria and best responses
//! - `CooperativeAnalyzer` - Characteristic function, core check, Shapley value
//! - `SocialChoiceAnalyzer` - Borda ranking and social payoff
//! - `GameAnalysisReport` - All of the above for one model
//!
//! No ports or adapters are involved; every function is side-effect free.

mod cooperative_analyzer;
mod equilibrium_analyzer;
mod report;
mod social_choice_analyzer;

pub use cooperative_analyzer::{
    CoalitionBaseline, CooperativeAnalysis, CooperativeAnalyzer, CoreCheck, ShapleyValue,
    CORE_TOLERANCE,
};
pub use equilibrium_analyzer::{Equilibrium, EquilibriumAnalyzer, NASH_TOLERANCE};
pub use report::{GameAnalysisReport, OutcomePayoffs, SocialChoiceSummary};
pub use social_choice_analyzer::{BordaResult, BordaScore, SocialChoiceAnalyzer};
