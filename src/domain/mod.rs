//! Domain layer - pure game logic with no I/O.
//!
//! - `foundation` - strategies, outcomes, coalitions, value objects, errors
//! - `payoff` - the payoff model and its two construction paths
//! - `analysis` - equilibrium, cooperative and social choice analyzers
//! - `simulation` - Monte Carlo flood model producing trial records

pub mod analysis;
pub mod foundation;
pub mod payoff;
pub mod simulation;
