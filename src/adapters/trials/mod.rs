//! Trial record adapters: CSV files and the in-process simulator.

mod csv_trial_file;
mod simulated_trial_source;

pub use csv_trial_file::{format_trials, parse_trials, CsvTrialFile};
pub use simulated_trial_source::SimulatedTrialSource;
