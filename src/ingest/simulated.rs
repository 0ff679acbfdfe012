/// Simulated air quality data source.
///
/// Stands in for a telemetry feed: the current index and forecast come
/// straight from configuration, and the hourly pollutant series is drawn
/// uniformly from the configured integer ranges.
///
/// # RNG injection
/// The generator is seeded explicitly. `with_seed` makes every draw
/// reproducible, which is what tests use; `new` takes the configured seed or
/// picks one and exposes it via `seed()` so a run can be replayed.
///
/// Both constructors validate the configuration, so an empty range can never
/// reach the generator.

use crate::config::SimulationConfig;
use crate::model::{ConfigError, ForecastPoint, PollutantReading, Scenario};

pub struct SimulatedSource {
    config: SimulationConfig,
    seed: u64,
    rng: fastrand::Rng,
}

impl SimulatedSource {
    /// Seeds from `config.seed`, or from a freshly drawn seed when unset.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: fastrand::Rng::with_seed(seed),
        })
    }

    /// Seed the generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn forecast(&self) -> Vec<ForecastPoint> {
        self.config.forecast.clone()
    }

    /// Draws one reading per configured hour.
    pub fn pollutants(&mut self) -> Vec<PollutantReading> {
        let [pm25_lo, pm25_hi] = self.config.pm25_range;
        let [pm10_lo, pm10_hi] = self.config.pm10_range;
        let [o3_lo, o3_hi] = self.config.ozone_range;

        self.config
            .hours()
            .into_iter()
            .map(|hour| PollutantReading {
                hour,
                pm25: self.rng.u32(pm25_lo..pm25_hi) as f64,
                pm10: self.rng.u32(pm10_lo..pm10_hi) as f64,
                ozone: self.rng.u32(o3_lo..o3_hi) as f64,
            })
            .collect()
    }

    /// Produces the inputs for one evaluation cycle.
    pub fn next_scenario(&mut self) -> Scenario {
        Scenario {
            current_index: self.config.current_index,
            forecast: self.forecast(),
            pollutants: self.pollutants(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SimulatedSource {
        SimulatedSource::with_seed(SimulationConfig::default(), seed)
            .expect("default config is valid")
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        assert_eq!(a.next_scenario(), b.next_scenario());
    }

    #[test]
    fn test_configured_seed_is_used() {
        let config = SimulationConfig {
            seed: Some(99),
            ..SimulationConfig::default()
        };
        let mut configured = SimulatedSource::new(config).expect("valid config");
        let mut explicit = seeded(99);
        assert_eq!(configured.seed(), 99);
        assert_eq!(configured.pollutants(), explicit.pollutants());
    }

    #[test]
    fn test_draws_stay_within_half_open_ranges() {
        let mut source = seeded(7);
        for _ in 0..50 {
            for r in source.pollutants() {
                assert!((20.0..60.0).contains(&r.pm25), "pm25 out of range: {}", r.pm25);
                assert!((30.0..70.0).contains(&r.pm10), "pm10 out of range: {}", r.pm10);
                assert!((15.0..55.0).contains(&r.ozone), "ozone out of range: {}", r.ozone);
                assert_eq!(r.ozone.fract(), 0.0, "draws are whole numbers");
            }
        }
    }

    #[test]
    fn test_series_is_ordered_by_hour() {
        let mut source = seeded(3);
        let hours: Vec<u32> = source.pollutants().iter().map(|r| r.hour).collect();
        assert_eq!(hours, (0..=24).step_by(2).collect::<Vec<u32>>());
    }

    #[test]
    fn test_scenario_carries_configured_index_and_forecast() {
        let mut source = seeded(1);
        let scenario = source.next_scenario();
        assert_eq!(scenario.current_index, 78.0);
        let values: Vec<f64> = scenario.forecast.iter().map(|f| f.index).collect();
        assert_eq!(values, vec![45.0, 52.0, 78.0, 112.0, 105.0, 85.0, 60.0]);
    }

    // --- Validation ---------------------------------------------------------

    #[test]
    fn test_inverted_range_is_rejected_before_drawing() {
        let config = SimulationConfig {
            ozone_range: [55, 15],
            ..SimulationConfig::default()
        };
        let result = SimulatedSource::with_seed(config, 1);
        assert!(
            matches!(result, Err(ConfigError::Invalid(_))),
            "inverted ozone range should be rejected"
        );
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let config = SimulationConfig {
            pm25_range: [30, 30],
            ..SimulationConfig::default()
        };
        assert!(matches!(SimulatedSource::new(config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_forecast_is_rejected() {
        let config = SimulationConfig {
            forecast: Vec::new(),
            ..SimulationConfig::default()
        };
        assert!(SimulatedSource::with_seed(config, 1).is_err());
    }
}
