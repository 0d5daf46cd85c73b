//! Common test utilities shared across all test modules
//!
//! Provides fixture builders for seeded generator configurations and fully
//! derived datasets so scenario tests stay deterministic.

use powerscope::generator::{self, GeneratorConfig};
use powerscope::dataset::Dataset;
use powerscope::power;

/// End timestamp shared by the fixtures: an arbitrary fixed epoch second.
pub const FIXTURE_END: i64 = 1_700_000_000;

/// Seed shared by the fixtures so every run draws the same noise.
pub const FIXTURE_SEED: u64 = 7;

/// A seeded default configuration ending at [`FIXTURE_END`].
pub fn seeded_config() -> GeneratorConfig {
    let mut config = GeneratorConfig::with_end(FIXTURE_END);
    config.seed = Some(FIXTURE_SEED);
    config
}

/// A seeded configuration with a reduced sample count for cheap tests.
pub fn small_config(samples: usize) -> GeneratorConfig {
    let mut config = seeded_config();
    config.samples = samples;
    config
}

/// A fully derived dataset (base quantities plus power channels).
pub fn derived_dataset(samples: usize, fp: f64) -> Dataset {
    let mut dataset = generator::generate(&small_config(samples));
    power::derive_power_channels(&mut dataset, fp)
        .expect("fixture power factor must be valid");
    dataset
}
