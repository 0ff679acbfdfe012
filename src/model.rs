/// Core data types for the air quality monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond small accessors and no I/O.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Index type
// ---------------------------------------------------------------------------

/// Unitless Air Quality Index magnitude. Non-negative in practice; no upper
/// bound is enforced.
pub type AirQualityIndex = f64;

// ---------------------------------------------------------------------------
// Category types
// ---------------------------------------------------------------------------

/// AQI severity buckets, in ascending order of severity.
///
/// Ranges live in `breakpoints::CATEGORY_BREAKPOINTS`; use
/// `analysis::category::categorize` to map an index onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitive => "Unhealthy for Sensitive",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
        }
    }

    /// Severity color used by the dashboard gauge and forecast bars.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Good => "green",
            Category::Moderate => "orange",
            Category::UnhealthyForSensitive => "red",
            Category::Unhealthy => "purple",
            Category::VeryUnhealthy => "maroon",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// Pollutants tracked in the hourly concentration series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Ozone,
}

impl Pollutant {
    /// All tracked pollutants, in display order.
    pub const ALL: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::Ozone];

    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Ozone => "O3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Concentrations observed at one hour of the day, in µg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub hour: u32,
    pub pm25: f64,
    pub pm10: f64,
    pub ozone: f64,
}

impl PollutantReading {
    pub fn concentration(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Ozone => self.ozone,
        }
    }
}

/// One day of the AQI forecast, e.g. `("Thu", 112.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day: String,
    pub index: AirQualityIndex,
}

impl ForecastPoint {
    pub fn new(day: impl Into<String>, index: AirQualityIndex) -> Self {
        Self {
            day: day.into(),
            index,
        }
    }
}

// ---------------------------------------------------------------------------
// Alert type
// ---------------------------------------------------------------------------

/// A warning produced when a threshold predicate holds.
///
/// The time label is display text (e.g. "Tomorrow, 10:00 AM"), not derived
/// from any clock. Alerts carry no identity; an evaluation cycle produces a
/// fresh list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub message: String,
    pub time_label: String,
}

impl Alert {
    pub fn new(message: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            time_label: time_label.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {}", self.message, self.time_label)
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// Everything a data source supplies for one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub current_index: AirQualityIndex,
    pub forecast: Vec<ForecastPoint>,
    pub pollutants: Vec<PollutantReading>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading the service configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    Io { path: String, message: String },
    /// The file is not valid TOML or does not match the expected schema.
    Parse(String),
    /// The file parsed but describes an unusable setup
    /// (empty forecast, inverted concentration range, ...).
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Could not read config {}: {}", path, message)
            }
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_display_joins_message_and_time_label() {
        let alert = Alert::new("Moderate Air Quality", "Today, 8:00 AM");
        assert_eq!(alert.to_string(), "Moderate Air Quality – Today, 8:00 AM");
    }

    #[test]
    fn test_concentration_selects_matching_field() {
        let reading = PollutantReading {
            hour: 6,
            pm25: 31.0,
            pm10: 44.0,
            ozone: 27.0,
        };
        assert_eq!(reading.concentration(Pollutant::Pm25), 31.0);
        assert_eq!(reading.concentration(Pollutant::Pm10), 44.0);
        assert_eq!(reading.concentration(Pollutant::Ozone), 27.0);
    }

    #[test]
    fn test_pollutant_display_names() {
        let names: Vec<String> = Pollutant::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["PM2.5", "PM10", "O3"]);
    }

    #[test]
    fn test_category_ordering_follows_severity() {
        assert!(Category::Good < Category::Moderate);
        assert!(Category::Moderate < Category::UnhealthyForSensitive);
        assert!(Category::UnhealthyForSensitive < Category::Unhealthy);
        assert!(Category::Unhealthy < Category::VeryUnhealthy);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid("forecast must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: forecast must not be empty");
    }
}
