//! river-resilience - analyze the upstream/downstream flood-risk game.
//!
//! Configuration comes from `RIVER_RESILIENCE__*` environment variables
//! (see [`river_resilience::config`]). The analysis report is printed to
//! stdout as JSON; logs go to stderr.

use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use river_resilience::adapters::{
    BuiltinExampleTables, CsvTrialFile, SimulatedTrialSource, YamlTablesFile,
};
use river_resilience::application::{PayoffInput, RunGameAnalysisCommand, RunGameAnalysisHandler};
use river_resilience::config::{AppConfig, InputMode, LoggingConfig};
use river_resilience::domain::simulation::{FloodSimulator, SimulationParameters};
use river_resilience::ports::{LiteralTablesSource, TrialSource};

const DEFAULT_TRIALS_PATH: &str = "sim_data.csv";

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    process::exit(1);
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| fail("Failed to load configuration", e));
    config
        .validate()
        .unwrap_or_else(|e| fail("Invalid configuration", e));
    init_tracing(&config.logging);

    let risk = config
        .analysis
        .risk_profile()
        .unwrap_or_else(|e| fail("Invalid risk profile", e));
    let weights = config
        .weights
        .player_weights()
        .unwrap_or_else(|e| fail("Invalid weights", e));

    let tables: Arc<dyn LiteralTablesSource> = match &config.input.tables_path {
        Some(path) => Arc::new(YamlTablesFile::new(path)),
        None => Arc::new(BuiltinExampleTables),
    };

    let trials_file = CsvTrialFile::new(
        config
            .input
            .trials_path
            .as_deref()
            .unwrap_or(DEFAULT_TRIALS_PATH),
    );
    let (input, trials): (PayoffInput, Arc<dyn TrialSource>) = match config.input.mode {
        InputMode::Literal => (PayoffInput::Literal, Arc::new(trials_file)),
        InputMode::Empirical => (PayoffInput::Empirical, Arc::new(trials_file)),
        InputMode::Simulated => {
            let simulator = FloodSimulator::new(
                SimulationParameters::default(),
                config.simulation.runs,
                config.simulation.seed,
            )
            .unwrap_or_else(|e| fail("Invalid simulation settings", e));
            (
                PayoffInput::Empirical,
                Arc::new(SimulatedTrialSource::new(simulator)),
            )
        }
    };

    let mut handler = RunGameAnalysisHandler::new(trials, tables);
    if config.input.mode == InputMode::Simulated {
        if let Some(path) = &config.input.trials_output_path {
            handler = handler.with_trial_sink(Arc::new(CsvTrialFile::new(path)));
        }
    }

    tracing::info!(mode = ?config.input.mode, "Starting game analysis");
    let report = handler
        .handle(RunGameAnalysisCommand {
            input,
            risk,
            weights,
            upstream_baseline: config.analysis.upstream_baseline.clone(),
            downstream_baseline: config.analysis.downstream_baseline.clone(),
        })
        .unwrap_or_else(|e| fail("Analysis failed", e));

    let json = serde_json::to_string_pretty(&report)
        .unwrap_or_else(|e| fail("Failed to serialize report", e));
    println!("{}", json);
}
