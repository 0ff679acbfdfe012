/// Per-pollutant statistics over an hourly concentration series.

use serde::{Deserialize, Serialize};

use crate::model::{Pollutant, PollutantReading};

/// Min / max / mean of one pollutant across the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantSummary {
    pub pollutant: Pollutant,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Hour at which `max` was first observed.
    pub peak_hour: u32,
}

/// Highest concentration of `pollutant`, or `None` for an empty series.
///
/// NaN readings are skipped; a series made only of NaN also yields `None`.
pub fn max_concentration(readings: &[PollutantReading], pollutant: Pollutant) -> Option<f64> {
    readings
        .iter()
        .map(|r| r.concentration(pollutant))
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(best) if best >= v => Some(best),
            _ => Some(v),
        })
}

/// Summary statistics for one pollutant. `None` when there is nothing to
/// summarize.
pub fn summarize_pollutant(
    readings: &[PollutantReading],
    pollutant: Pollutant,
) -> Option<PollutantSummary> {
    let values: Vec<(u32, f64)> = readings
        .iter()
        .map(|r| (r.hour, r.concentration(pollutant)))
        .filter(|(_, v)| !v.is_nan())
        .collect();

    let (first_hour, first_value) = *values.first()?;
    let mut min = first_value;
    let mut max = first_value;
    let mut peak_hour = first_hour;
    let mut sum = 0.0;

    for &(hour, value) in &values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
            peak_hour = hour;
        }
        sum += value;
    }

    Some(PollutantSummary {
        pollutant,
        min,
        max,
        mean: sum / values.len() as f64,
        peak_hour,
    })
}

/// Summaries for every tracked pollutant, in `Pollutant::ALL` order.
/// Empty when the series is empty.
pub fn summarize(readings: &[PollutantReading]) -> Vec<PollutantSummary> {
    Pollutant::ALL
        .iter()
        .filter_map(|&p| summarize_pollutant(readings, p))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(hour: u32, pm25: f64, pm10: f64, ozone: f64) -> PollutantReading {
        PollutantReading {
            hour,
            pm25,
            pm10,
            ozone,
        }
    }

    fn sample_series() -> Vec<PollutantReading> {
        vec![
            reading(0, 22.0, 41.0, 18.0),
            reading(2, 35.0, 38.0, 45.0),
            reading(4, 28.0, 66.0, 30.0),
        ]
    }

    #[test]
    fn test_max_of_empty_series_is_none() {
        assert_eq!(max_concentration(&[], Pollutant::Ozone), None);
    }

    #[test]
    fn test_max_picks_highest_value() {
        assert_eq!(max_concentration(&sample_series(), Pollutant::Ozone), Some(45.0));
        assert_eq!(max_concentration(&sample_series(), Pollutant::Pm10), Some(66.0));
    }

    #[test]
    fn test_max_skips_nan() {
        let series = vec![reading(0, 1.0, 1.0, f64::NAN), reading(2, 1.0, 1.0, 12.0)];
        assert_eq!(max_concentration(&series, Pollutant::Ozone), Some(12.0));
    }

    #[test]
    fn test_summary_statistics() {
        let summary = summarize_pollutant(&sample_series(), Pollutant::Pm25)
            .expect("non-empty series should summarize");
        assert_eq!(summary.min, 22.0);
        assert_eq!(summary.max, 35.0);
        assert_eq!(summary.peak_hour, 2);
        assert!((summary.mean - 85.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_covers_all_pollutants_in_order() {
        let pollutants: Vec<Pollutant> = summarize(&sample_series())
            .into_iter()
            .map(|s| s.pollutant)
            .collect();
        assert_eq!(pollutants, Pollutant::ALL.to_vec());
    }

    #[test]
    fn test_summarize_empty_series_is_empty() {
        assert!(summarize(&[]).is_empty());
    }
}
