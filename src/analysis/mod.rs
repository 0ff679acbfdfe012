/// Pure analysis of air quality inputs.
///
/// Submodules:
/// - `category`: maps an AQI value onto its severity bucket and color.
/// - `pollutants`: per-pollutant peaks and summary statistics.

pub mod category;
pub mod pollutants;
