//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TrialSource` / `TrialSink` - Empirical trial records
//! - `LiteralTablesSource` - Per-attribute payoff tables

mod literal_tables_source;
mod trial_source;

pub use literal_tables_source::LiteralTablesSource;
pub use trial_source::{TrialSink, TrialSource};
