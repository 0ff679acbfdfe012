/// Alerting for the air quality service.
///
/// Submodules:
/// - `thresholds`: fixed-order threshold rules that turn a cycle's inputs
///   into an ordered alert list.

pub mod thresholds;

pub use thresholds::{evaluate, evaluate_with_rules, AlertRule, AlertRules};
