/// Threshold alert evaluation.
///
/// Three independent predicates run in a fixed order and each appends one
/// alert when it holds:
///
/// 1. current index above the sensitive-groups threshold (100)
/// 2. peak ozone above the ozone threshold (50)
/// 3. current index above the moderate-air threshold (50)
///
/// Output order is evaluation order, not severity. An index above 100 fires
/// both rule 1 and rule 3. Time labels are fixed display text; nothing here
/// reads a clock.
///
/// Delivery, deduplication and cooldowns are out of scope: callers receive a
/// fresh list per cycle and decide what to do with it.

use serde::{Deserialize, Serialize};

use crate::analysis::pollutants::max_concentration;
use crate::model::{AirQualityIndex, Alert, ForecastPoint, Pollutant, PollutantReading};

// ---------------------------------------------------------------------------
// Rule definitions
// ---------------------------------------------------------------------------

/// A single "value strictly above threshold" rule and the alert it emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    pub threshold: f64,
    pub message: String,
    pub time_label: String,
}

impl AlertRule {
    pub fn new(threshold: f64, message: &str, time_label: &str) -> Self {
        Self {
            threshold,
            message: message.to_string(),
            time_label: time_label.to_string(),
        }
    }

    /// Strictly greater than: a value equal to the threshold does not fire.
    pub fn fires(&self, value: f64) -> bool {
        value > self.threshold
    }

    fn to_alert(&self) -> Alert {
        Alert::new(self.message.clone(), self.time_label.clone())
    }
}

/// The three rules, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertRules {
    pub sensitive_groups: AlertRule,
    pub high_ozone: AlertRule,
    pub moderate_air: AlertRule,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            sensitive_groups: AlertRule::new(
                100.0,
                "Unhealthy for Sensitive Groups",
                "Tomorrow, 10:00 AM",
            ),
            high_ozone: AlertRule::new(50.0, "High Ozone Levels Expected", "Friday, 2:00 PM"),
            moderate_air: AlertRule::new(50.0, "Moderate Air Quality", "Today, 8:00 AM"),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluates the default rules.
///
/// `forecast` is accepted so callers can hand over a whole cycle's inputs;
/// no current rule consults it.
pub fn evaluate(
    current_index: AirQualityIndex,
    pollutants: &[PollutantReading],
    forecast: &[ForecastPoint],
) -> Vec<Alert> {
    evaluate_with_rules(&AlertRules::default(), current_index, pollutants, forecast)
}

/// Evaluates a configured rule set. Pure; identical inputs always produce an
/// identical list.
pub fn evaluate_with_rules(
    rules: &AlertRules,
    current_index: AirQualityIndex,
    pollutants: &[PollutantReading],
    _forecast: &[ForecastPoint],
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if rules.sensitive_groups.fires(current_index) {
        alerts.push(rules.sensitive_groups.to_alert());
    }

    // Empty series: no peak, so the ozone rule cannot fire.
    let ozone_peak = max_concentration(pollutants, Pollutant::Ozone).unwrap_or(f64::NEG_INFINITY);
    if rules.high_ozone.fires(ozone_peak) {
        alerts.push(rules.high_ozone.to_alert());
    }

    if rules.moderate_air.fires(current_index) {
        alerts.push(rules.moderate_air.to_alert());
    }

    alerts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
