/// Data sources feeding the evaluation cycle.
///
/// Submodules:
/// - `simulated`: seedable stand-in for a live telemetry feed.

pub mod simulated;
