/// Service configuration loaded from TOML.
///
/// Every section is optional; anything left out falls back to the reference
/// scenario (current AQI 78, the Mon..Sun forecast, hourly draws every two
/// hours) and the reference alert rules.
///
/// The file path comes from `AQMON_CONFIG` (a `.env` file is honored), and
/// otherwise `aqmon.toml` in the working directory if it exists.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::alert::AlertRules;
use crate::logging::LogLevel;
use crate::model::{AirQualityIndex, ConfigError, ForecastPoint};

pub const CONFIG_ENV_VAR: &str = "AQMON_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "aqmon.toml";

// ---------------------------------------------------------------------------
// Configuration sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub alerts: AlertRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// "debug", "info", "warn" or "error"
    pub level: String,
    /// Append log lines to this file in addition to the console.
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn min_level(&self) -> Result<LogLevel, ConfigError> {
        self.level
            .parse()
            .map_err(|e: String| ConfigError::Invalid(format!("logging.level: {}", e)))
    }
}

/// Parameters for the simulated data source. Concentration ranges are
/// half-open `[low, high)` integer draws in µg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed RNG seed; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    pub current_index: AirQualityIndex,
    pub forecast: Vec<ForecastPoint>,
    pub hour_step: u32,
    pub last_hour: u32,
    pub pm25_range: [u32; 2],
    pub pm10_range: [u32; 2],
    pub ozone_range: [u32; 2],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let values = [45.0, 52.0, 78.0, 112.0, 105.0, 85.0, 60.0];
        Self {
            seed: None,
            current_index: 78.0,
            forecast: days
                .iter()
                .zip(values)
                .map(|(day, index)| ForecastPoint::new(*day, index))
                .collect(),
            hour_step: 2,
            last_hour: 24,
            pm25_range: [20, 60],
            pm10_range: [30, 70],
            ozone_range: [15, 55],
        }
    }
}

impl SimulationConfig {
    /// Hours of day covered by the pollutant series: 0, step, 2*step, ...
    /// up to and including `last_hour`.
    pub fn hours(&self) -> Vec<u32> {
        (0..=self.last_hour).step_by(self.hour_step.max(1) as usize).collect()
    }

    /// Rejects setups the simulator cannot draw from: an empty forecast, a
    /// zero hour step or an empty concentration range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecast.is_empty() {
            return Err(ConfigError::Invalid(
                "simulation.forecast must contain at least one day".to_string(),
            ));
        }
        if self.hour_step == 0 {
            return Err(ConfigError::Invalid(
                "simulation.hour_step must be greater than zero".to_string(),
            ));
        }
        for (name, [low, high]) in [
            ("pm25_range", self.pm25_range),
            ("pm10_range", self.pm10_range),
            ("ozone_range", self.ozone_range),
        ] {
            if low >= high {
                return Err(ConfigError::Invalid(format!(
                    "simulation.{} must satisfy low < high, got [{}, {}]",
                    name, low, high
                )));
            }
        }
        Ok(())
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.min_level()?;
        self.simulation.validate()
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parses and validates configuration text.
pub fn parse_config(text: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig =
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates a configuration file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_config(&text)
}

/// Picks the configuration file to load.
///
/// An explicit path (from `AQMON_CONFIG`) always wins, even if it does not
/// exist, so a typo surfaces as an error instead of silently using defaults.
/// Without one, `default_path` is used only when present.
pub fn resolve_config_path(explicit: Option<String>, default_path: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
        _ if default_path.exists() => Some(default_path.to_path_buf()),
        _ => None,
    }
}

/// Loads `.env`, resolves the config path and loads it, or returns the
/// defaults when no file is configured.
///
/// Returns the path that was used alongside the configuration.
pub fn load_from_env() -> Result<(ServiceConfig, Option<PathBuf>), ConfigError> {
    dotenv::dotenv().ok();

    let explicit = std::env::var(CONFIG_ENV_VAR).ok();
    match resolve_config_path(explicit, Path::new(DEFAULT_CONFIG_PATH)) {
        Some(path) => load_config(&path).map(|config| (config, Some(path))),
        None => Ok((ServiceConfig::default(), None)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
