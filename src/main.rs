/// Air quality alert service entry point.
///
/// Runs one evaluation cycle against the simulated data source and prints
/// the dashboard snapshot, as a text report by default or as JSON with
/// `--json`.
///
/// Environment:
///   AQMON_CONFIG  path to a TOML config file (default: ./aqmon.toml if present)
///   AQMON_SEED    overrides simulation.seed

use std::process::ExitCode;

use aqmon_service::config::{self, ServiceConfig};
use aqmon_service::dashboard::build_snapshot;
use aqmon_service::ingest::simulated::SimulatedSource;
use aqmon_service::logging::{self, Component, LogLevel};

const SEED_ENV_VAR: &str = "AQMON_SEED";

fn main() -> ExitCode {
    let json_output = std::env::args().skip(1).any(|arg| arg == "--json");

    let (mut config, config_path) = match config::load_from_env() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ {}", e);
            return ExitCode::FAILURE;
        }
    };

    // validate() already checked the level
    let mut min_level = config.logging.min_level().unwrap_or(LogLevel::Info);
    if json_output {
        // Info and debug go to stdout and would corrupt the JSON document.
        min_level = min_level.max(LogLevel::Warning);
    }
    logging::init_logger(min_level, config.logging.file.as_deref(), config.logging.timestamps);

    match &config_path {
        Some(path) => logging::info(
            Component::Config,
            None,
            &format!("Loaded configuration from {}", path.display()),
        ),
        None => logging::debug(Component::Config, None, "No config file found, using defaults"),
    }

    apply_seed_override(&mut config);

    run_cycle(&config, json_output)
}

fn apply_seed_override(config: &mut ServiceConfig) {
    let Ok(raw) = std::env::var(SEED_ENV_VAR) else {
        return;
    };
    match raw.trim().parse::<u64>() {
        Ok(seed) => config.simulation.seed = Some(seed),
        Err(e) => logging::warn(
            Component::Config,
            Some(SEED_ENV_VAR),
            &format!("Ignoring unparseable seed '{}': {}", raw, e),
        ),
    }
}

fn run_cycle(config: &ServiceConfig, json_output: bool) -> ExitCode {
    let mut source = match SimulatedSource::new(config.simulation.clone()) {
        Ok(source) => source,
        Err(e) => {
            logging::error(Component::Simulator, None, &e.to_string());
            return ExitCode::FAILURE;
        }
    };
    logging::debug(
        Component::Simulator,
        None,
        &format!("Drawing pollutant series with seed {}", source.seed()),
    );

    let scenario = source.next_scenario();
    let snapshot = build_snapshot(&scenario, &config.alerts, chrono::Utc::now());

    logging::debug(
        Component::Categorizer,
        None,
        &format!(
            "Current AQI {} categorized as {}",
            snapshot.current.index, snapshot.current.category.label
        ),
    );

    if json_output {
        match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                logging::error(Component::System, None, &format!("JSON export failed: {}", e));
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", snapshot.render_text_report());
    }

    logging::log_alert_summary(Some(&format!("seed {}", source.seed())), &snapshot.alerts);
    ExitCode::SUCCESS
}
