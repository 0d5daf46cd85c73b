//! Derived power calculation.
//!
//! For each phase, active, reactive, and apparent power are computed from the
//! generated voltage and current channels and a fixed power factor:
//!
//! - `P = V · I · fp`
//! - `Q = V · I · sin(arccos(fp))`
//! - `S = V · I`
//!
//! which guarantees `S² = P² + Q²` up to floating-point error. A power factor
//! outside `[-1, 1]` would put `arccos` outside its domain, so it is rejected
//! up front instead of propagating NaN into the dataset.

use thiserror::Error;

use crate::dataset::{Channel, Dataset, Phase, Quantity};

/// Default power factor applied to the generated load.
pub const DEFAULT_POWER_FACTOR: f64 = 0.92;

/// Errors raised while deriving power channels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerError {
    /// The configured power factor is outside the arccos domain.
    #[error("invalid power factor {0}: must be within [-1, 1]")]
    InvalidPowerFactor(f64),
    /// A required voltage or current channel is missing from the dataset.
    #[error("missing channel '{0}' required for power derivation")]
    MissingChannel(String),
}

/// The reactive multiplier `sin(arccos(fp))` for a valid power factor.
///
/// Fails fast on out-of-domain values; `fp = 0.92` yields ≈ 0.3919.
pub fn reactive_factor(fp: f64) -> Result<f64, PowerError> {
    if !fp.is_finite() || !(-1.0..=1.0).contains(&fp) {
        return Err(PowerError::InvalidPowerFactor(fp));
    }
    Ok(fp.acos().sin())
}

/// Extend `dataset` with active, reactive, and apparent power channels for
/// every phase, derived from its phase-voltage and current channels.
pub fn derive_power_channels(dataset: &mut Dataset, fp: f64) -> Result<(), PowerError> {
    let reactive = reactive_factor(fp)?;

    for phase in Phase::ALL {
        let voltage = dataset
            .channel_for(Quantity::PhaseVoltage, phase)
            .ok_or_else(|| {
                PowerError::MissingChannel(Quantity::PhaseVoltage.channel_name(phase))
            })?;
        let current = dataset
            .channel_for(Quantity::Current, phase)
            .ok_or_else(|| PowerError::MissingChannel(Quantity::Current.channel_name(phase)))?;

        let apparent: Vec<f64> = voltage
            .values
            .iter()
            .zip(current.values.iter())
            .map(|(v, i)| v * i)
            .collect();
        let active: Vec<f64> = apparent.iter().map(|s| s * fp).collect();
        let reactive_values: Vec<f64> = apparent.iter().map(|s| s * reactive).collect();

        dataset.push_channel(Channel::new(Quantity::ActivePower, phase, active));
        dataset.push_channel(Channel::new(Quantity::ReactivePower, phase, reactive_values));
        dataset.push_channel(Channel::new(Quantity::ApparentPower, phase, apparent));
    }

    Ok(())
}
