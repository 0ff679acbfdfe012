/// Dashboard snapshot: the data behind each dashboard panel.
///
/// One snapshot per evaluation cycle, holding the gauge (current index,
/// category, axis and colored bands), the forecast bars, the pollutant
/// series with summaries, and the active alerts. Drawing any of it is left
/// to the presentation layer; this module only assembles and serializes.
///
/// # Clock injection
/// `build_snapshot` takes `now` rather than calling `Utc::now()`, so a
/// snapshot is a pure function of its inputs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::alert::{evaluate_with_rules, AlertRules};
use crate::analysis::category::{categorize, CategoryInfo};
use crate::analysis::pollutants::{summarize, PollutantSummary};
use crate::breakpoints::{lower_bound_for, CATEGORY_BREAKPOINTS};
use crate::model::{AirQualityIndex, Alert, Category, PollutantReading, Scenario};

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// One colored step on the gauge, spanning `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub low: AirQualityIndex,
    pub high: AirQualityIndex,
    pub category: Category,
    pub color: &'static str,
}

/// Gauge axis and bands. Only bounded categories get a band; the axis ends
/// at the highest bounded breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis_min: AirQualityIndex,
    pub axis_max: AirQualityIndex,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub index: AirQualityIndex,
    pub category: CategoryInfo,
    pub gauge: Gauge,
}

/// One bar of the forecast chart, colored by its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastBar {
    pub day: String,
    pub index: AirQualityIndex,
    pub category: CategoryInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastBar>,
    pub pollutants: Vec<PollutantReading>,
    pub pollutant_summaries: Vec<PollutantSummary>,
    pub alerts: Vec<Alert>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Gauge layout derived from `CATEGORY_BREAKPOINTS`: 0..200 with one band
/// per bounded row.
pub fn gauge_layout() -> Gauge {
    let bands: Vec<GaugeBand> = CATEGORY_BREAKPOINTS
        .iter()
        .filter_map(|row| {
            let high = row.upper_bound?;
            Some(GaugeBand {
                low: lower_bound_for(row.category).unwrap_or(0.0),
                high,
                category: row.category,
                color: row.category.color(),
            })
        })
        .collect();

    Gauge {
        axis_min: 0.0,
        axis_max: bands.last().map(|b| b.high).unwrap_or(0.0),
        bands,
    }
}

/// Categorizes and evaluates one scenario.
pub fn build_snapshot(scenario: &Scenario, rules: &AlertRules, now: DateTime<Utc>) -> DashboardSnapshot {
    let forecast = scenario
        .forecast
        .iter()
        .map(|point| ForecastBar {
            day: point.day.clone(),
            index: point.index,
            category: categorize(point.index),
        })
        .collect();

    DashboardSnapshot {
        generated_at: now.to_rfc3339(),
        current: CurrentConditions {
            index: scenario.current_index,
            category: categorize(scenario.current_index),
            gauge: gauge_layout(),
        },
        forecast,
        pollutants: scenario.pollutants.clone(),
        pollutant_summaries: summarize(&scenario.pollutants),
        alerts: evaluate_with_rules(
            rules,
            scenario.current_index,
            &scenario.pollutants,
            &scenario.forecast,
        ),
    }
}

impl DashboardSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendition for console output.
    pub fn render_text_report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DashboardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Air Quality Alert System")?;
        writeln!(f, "Generated: {}", self.generated_at)?;
        writeln!(f)?;
        writeln!(
            f,
            "Current AQI: {} ({}, {})",
            self.current.index, self.current.category.label, self.current.category.color
        )?;

        writeln!(f)?;
        writeln!(f, "{}-Day Forecast:", self.forecast.len())?;
        for bar in &self.forecast {
            writeln!(f, "  {:<5} {:>6}  {}", bar.day, bar.index, bar.category.label)?;
        }

        writeln!(f)?;
        writeln!(f, "Pollutant Concentrations (µg/m³):")?;
        if self.pollutant_summaries.is_empty() {
            writeln!(f, "  (no readings)")?;
        }
        for s in &self.pollutant_summaries {
            writeln!(
                f,
                "  {:<6} min {:>5.1}  max {:>5.1}  mean {:>5.1}  (peak {:02}:00)",
                s.pollutant.display_name(),
                s.min,
                s.max,
                s.mean,
                s.peak_hour
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Active Alerts:")?;
        if self.alerts.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for alert in &self.alerts {
            writeln!(f, "  - {}", alert)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
