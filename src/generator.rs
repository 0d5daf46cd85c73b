//! Synthetic series generation.
//!
//! Produces the base quantities (phase voltage, line voltage, current, one
//! channel per phase) as `base + linear trend + gaussian noise` over a fixed
//! one-minute time axis. Generation is the only expensive step of the
//! pipeline, so a [`DatasetCache`] memoizes complete datasets keyed on the
//! generation parameters; reruns triggered by unrelated UI interactions reuse
//! the cached dataset.

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::dataset::{Channel, Dataset, Phase, Quantity};
use crate::power::{self, PowerError};

/// Default sample count: two days at one sample per minute.
pub const DEFAULT_SAMPLE_COUNT: usize = 2880;

/// Fixed sampling interval in seconds.
pub const SAMPLE_INTERVAL_SECS: i64 = 60;

/// Noise standard deviation as a fraction of the series amplitude.
const NOISE_RATIO: f64 = 0.1;

/// Base level and trend amplitude for one generated quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSpec {
    pub quantity: Quantity,
    /// Starting level of the series
    pub base: f64,
    /// Total linear ramp across the series; noise σ is 10% of this
    pub amplitude: f64,
}

/// Parameters for one dataset generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of samples per channel
    pub samples: usize,
    /// Spacing of the time axis in seconds
    pub interval_secs: i64,
    /// Timestamp of the last sample, epoch seconds
    pub end: i64,
    /// RNG seed; `None` seeds from entropy (tests inject a seed)
    pub seed: Option<u64>,
    /// Per-quantity (base, amplitude) table for the generated quantities
    pub series: Vec<SeriesSpec>,
}

impl GeneratorConfig {
    /// Default parameter table: nominal 127 V-class phase voltage, its
    /// line-to-line counterpart, and a 10 A-class load current.
    pub fn with_end(end: i64) -> Self {
        Self {
            samples: DEFAULT_SAMPLE_COUNT,
            interval_secs: SAMPLE_INTERVAL_SECS,
            end,
            seed: None,
            series: vec![
                SeriesSpec {
                    quantity: Quantity::PhaseVoltage,
                    base: 125.0,
                    amplitude: 3.0,
                },
                SeriesSpec {
                    quantity: Quantity::LineVoltage,
                    base: 216.5,
                    amplitude: 5.0,
                },
                SeriesSpec {
                    quantity: Quantity::Current,
                    base: 10.0,
                    amplitude: 2.0,
                },
            ],
        }
    }

    /// The ascending time axis this configuration produces.
    fn time_axis(&self) -> Vec<i64> {
        (0..self.samples)
            .map(|i| self.end - (self.samples as i64 - 1 - i as i64) * self.interval_secs)
            .collect()
    }
}

/// Draw one standard-normal sample via the Box-Muller transform.
fn gaussian(rng: &mut StdRng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// The noise-free trend component at sample `i` of `n`.
///
/// Ramps linearly from 0 at the first sample to `amplitude` at the last, so
/// it is monotonically non-decreasing whenever `amplitude >= 0`.
pub fn trend(amplitude: f64, i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        amplitude * i as f64 / (n - 1) as f64
    }
}

/// Generate the base quantities described by `config`.
///
/// Every channel shares the same time axis; each (quantity, phase) pair gets
/// an independent noise draw from the same RNG stream.
pub fn generate(config: &GeneratorConfig) -> Dataset {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut dataset = Dataset::new(config.time_axis());
    let n = config.samples;

    for spec in &config.series {
        let sigma = spec.amplitude.abs() * NOISE_RATIO;
        for phase in Phase::ALL {
            let values: Vec<f64> = (0..n)
                .map(|i| spec.base + trend(spec.amplitude, i, n) + gaussian(&mut rng) * sigma)
                .collect();
            dataset.push_channel(Channel::new(spec.quantity, phase, values));
        }
    }

    info!(
        samples = n,
        channels = dataset.channels.len(),
        "generated synthetic dataset"
    );
    dataset
}

/// Cache key derived from a [`GeneratorConfig`] plus the power factor used
/// for the derived channels. Float parameters are keyed by their bit
/// patterns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    samples: usize,
    interval_secs: i64,
    end: i64,
    seed: Option<u64>,
    series: Vec<(Quantity, u64, u64)>,
    power_factor: u64,
}

impl CacheKey {
    fn new(config: &GeneratorConfig, power_factor: f64) -> Self {
        Self {
            samples: config.samples,
            interval_secs: config.interval_secs,
            end: config.end,
            seed: config.seed,
            series: config
                .series
                .iter()
                .map(|s| (s.quantity, s.base.to_bits(), s.amplitude.to_bits()))
                .collect(),
            power_factor: power_factor.to_bits(),
        }
    }
}

/// Memoization of complete datasets (base quantities plus derived power),
/// keyed on the generation parameters.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<CacheKey, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the dataset for (config, power factor), generating and deriving
    /// power channels only on the first request for this parameter set.
    pub fn get_or_generate(
        &mut self,
        config: &GeneratorConfig,
        power_factor: f64,
    ) -> Result<Arc<Dataset>, PowerError> {
        let key = CacheKey::new(config, power_factor);
        if let Some(dataset) = self.entries.get(&key) {
            debug!("dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        // Validate the power factor before paying for generation.
        power::reactive_factor(power_factor)?;

        let mut dataset = generate(config);
        power::derive_power_channels(&mut dataset, power_factor)?;

        let dataset = Arc::new(dataset);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }
}
