//! Tests for phase selection over generated datasets.

use powerscope::dataset::{Phase, Quantity};
use powerscope::power::DEFAULT_POWER_FACTOR;
use powerscope::selector::{self, PhaseSelection, SelectionError};

use crate::common;

#[test]
fn test_full_selection_keeps_every_channel() {
    let dataset = common::derived_dataset(32, DEFAULT_POWER_FACTOR);
    let view = dataset.view();
    let selected = selector::select_view(&view, &PhaseSelection::default()).unwrap();
    assert_eq!(selected.channels.len(), view.channels.len());
}

#[test]
fn test_empty_selection_is_rejected_before_rendering() {
    let dataset = common::derived_dataset(32, DEFAULT_POWER_FACTOR);
    let empty = PhaseSelection {
        a: false,
        b: false,
        c: false,
    };
    let result = selector::select_view(&dataset.view(), &empty);
    assert_eq!(result.unwrap_err(), SelectionError::EmptyPhaseSelection);
}

#[test]
fn test_two_phase_selection_drops_the_third() {
    let dataset = common::derived_dataset(32, DEFAULT_POWER_FACTOR);
    let selection = PhaseSelection {
        a: true,
        b: false,
        c: true,
    };
    let selected = selector::select_view(&dataset.view(), &selection).unwrap();

    // 6 quantities on 2 phases each
    assert_eq!(selected.channels.len(), 12);
    assert!(selected.channels.iter().all(|c| c.phase != Phase::B));
    assert!(selected
        .channels
        .iter()
        .any(|c| c.quantity == Quantity::ReactivePower && c.phase == Phase::C));
}

#[test]
fn test_single_phase_selection_for_phase_pages() {
    let dataset = common::derived_dataset(32, DEFAULT_POWER_FACTOR);
    let selected =
        selector::select_view(&dataset.view(), &PhaseSelection::only(Phase::B)).unwrap();

    assert_eq!(selected.channels.len(), 6);
    assert!(selected.channels.iter().all(|c| c.phase == Phase::B));
    assert!(selected
        .channels
        .iter()
        .all(|c| c.name.ends_with(Phase::B.suffix())));
}

#[test]
fn test_selection_composes_with_name_based_filtering() {
    let dataset = common::derived_dataset(32, DEFAULT_POWER_FACTOR);
    let names: Vec<&str> = dataset.channels.iter().map(|c| c.name.as_str()).collect();

    let selection = PhaseSelection {
        a: true,
        b: false,
        c: false,
    };
    let selected = selector::select_names(&names, &selection).unwrap();
    assert_eq!(selected.len(), 6);
    assert!(selected.iter().all(|name| name.ends_with('A')));
}
