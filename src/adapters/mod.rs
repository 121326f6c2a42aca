//! Adapters - Implementations of port interfaces.
//!
//! - `trials` - CSV trial files and the in-process flood simulator
//! - `tables` - YAML literal tables and the built-in example

pub mod tables;
pub mod trials;

pub use tables::{BuiltinExampleTables, YamlTablesFile};
pub use trials::{format_trials, parse_trials, CsvTrialFile, SimulatedTrialSource};
