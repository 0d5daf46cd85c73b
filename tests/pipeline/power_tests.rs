//! Tests for power derivation over generated datasets.

use powerscope::dataset::{Phase, Quantity};
use powerscope::power::{self, PowerError, DEFAULT_POWER_FACTOR};

use crate::common;

#[test]
fn test_power_triangle_holds_across_generated_dataset() {
    let dataset = common::derived_dataset(512, DEFAULT_POWER_FACTOR);

    for phase in Phase::ALL {
        let active = &dataset
            .channel_for(Quantity::ActivePower, phase)
            .unwrap()
            .values;
        let reactive = &dataset
            .channel_for(Quantity::ReactivePower, phase)
            .unwrap()
            .values;
        let apparent = &dataset
            .channel_for(Quantity::ApparentPower, phase)
            .unwrap()
            .values;

        for i in 0..active.len() {
            let lhs = apparent[i] * apparent[i];
            let rhs = active[i] * active[i] + reactive[i] * reactive[i];
            assert!(
                ((lhs - rhs) / lhs).abs() < 1e-6,
                "S² != P² + Q² for phase {:?} at sample {i}",
                phase
            );
        }
    }
}

#[test]
fn test_active_power_is_apparent_scaled_by_power_factor() {
    let dataset = common::derived_dataset(64, DEFAULT_POWER_FACTOR);
    let active = &dataset
        .channel_for(Quantity::ActivePower, Phase::A)
        .unwrap()
        .values;
    let apparent = &dataset
        .channel_for(Quantity::ApparentPower, Phase::A)
        .unwrap()
        .values;

    for i in 0..active.len() {
        assert!((active[i] - apparent[i] * DEFAULT_POWER_FACTOR).abs() < 1e-9);
    }
}

#[test]
fn test_apparent_power_is_voltage_times_current() {
    let dataset = common::derived_dataset(64, DEFAULT_POWER_FACTOR);
    let voltage = &dataset
        .channel_for(Quantity::PhaseVoltage, Phase::C)
        .unwrap()
        .values;
    let current = &dataset
        .channel_for(Quantity::Current, Phase::C)
        .unwrap()
        .values;
    let apparent = &dataset
        .channel_for(Quantity::ApparentPower, Phase::C)
        .unwrap()
        .values;

    for i in 0..apparent.len() {
        assert!((apparent[i] - voltage[i] * current[i]).abs() < 1e-9);
    }
}

#[test]
fn test_reactive_factor_for_default_power_factor() {
    // sin(arccos(0.92)) = sqrt(1 - 0.92²) ≈ 0.392
    let reactive = power::reactive_factor(DEFAULT_POWER_FACTOR).unwrap();
    let expected = (1.0f64 - DEFAULT_POWER_FACTOR * DEFAULT_POWER_FACTOR).sqrt();
    assert!((reactive - expected).abs() < 1e-12);
    assert!((reactive - 0.392).abs() < 1e-3);
}

#[test]
fn test_out_of_domain_power_factor_fails_fast() {
    let mut dataset = common::derived_dataset(16, DEFAULT_POWER_FACTOR);
    // Deriving again with an invalid factor must fail without touching the
    // dataset, and the error names the offending value.
    let before = dataset.channels.len();
    let err = power::derive_power_channels(&mut dataset, 1.01).unwrap_err();
    assert_eq!(err, PowerError::InvalidPowerFactor(1.01));
    assert_eq!(dataset.channels.len(), before);
    assert!(err.to_string().contains("power factor"));
}
