//! Per-phase channel selection.
//!
//! Channel names end in a phase suffix ("Tensão Fase A"); the selector keeps
//! the channels whose trailing token is one of the phases the user ticked.
//! An empty phase set is a guarded precondition: it is rejected here, before
//! any chart is rendered, so downstream code never has to distinguish "no
//! phases selected" from "window contained no samples".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::{ChannelSlice, DatasetView, Phase};

/// Errors raised by the channel selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No phase checkbox is ticked; rendering must not proceed.
    #[error("no phase selected: tick at least one of A, B, C")]
    EmptyPhaseSelection,
}

/// The three per-phase toggles, all enabled by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSelection {
    pub a: bool,
    pub b: bool,
    pub c: bool,
}

impl Default for PhaseSelection {
    fn default() -> Self {
        Self {
            a: true,
            b: true,
            c: true,
        }
    }
}

impl PhaseSelection {
    /// A selection with exactly one phase ticked (the per-phase pages).
    pub fn only(phase: Phase) -> Self {
        Self {
            a: phase == Phase::A,
            b: phase == Phase::B,
            c: phase == Phase::C,
        }
    }

    /// Whether the given phase is ticked.
    pub fn contains(&self, phase: Phase) -> bool {
        match phase {
            Phase::A => self.a,
            Phase::B => self.b,
            Phase::C => self.c,
        }
    }

    /// True when no phase is ticked.
    pub fn is_empty(&self) -> bool {
        !(self.a || self.b || self.c)
    }

    /// The ticked phases in display order.
    pub fn phases(&self) -> Vec<Phase> {
        Phase::ALL
            .into_iter()
            .filter(|p| self.contains(*p))
            .collect()
    }

    /// Mutable access to one phase's toggle, for checkbox binding.
    pub fn toggle_mut(&mut self, phase: Phase) -> &mut bool {
        match phase {
            Phase::A => &mut self.a,
            Phase::B => &mut self.b,
            Phase::C => &mut self.c,
        }
    }
}

/// The phase encoded in a channel name's trailing whitespace-separated token.
pub fn phase_suffix(name: &str) -> Option<Phase> {
    name.rsplit(char::is_whitespace)
        .next()
        .and_then(Phase::from_suffix)
}

/// Keep the channel names whose trailing phase token is selected.
///
/// Names without a recognizable phase suffix are dropped; an empty selection
/// is rejected before any filtering happens.
pub fn select_names<'a>(
    names: &[&'a str],
    selection: &PhaseSelection,
) -> Result<Vec<&'a str>, SelectionError> {
    if selection.is_empty() {
        return Err(SelectionError::EmptyPhaseSelection);
    }
    Ok(names
        .iter()
        .filter(|name| phase_suffix(name).is_some_and(|p| selection.contains(p)))
        .copied()
        .collect())
}

/// Restrict a view's channels to the selected phases.
pub fn select_channels<'a>(
    channels: &[ChannelSlice<'a>],
    selection: &PhaseSelection,
) -> Result<Vec<ChannelSlice<'a>>, SelectionError> {
    if selection.is_empty() {
        return Err(SelectionError::EmptyPhaseSelection);
    }
    Ok(channels
        .iter()
        .filter(|c| selection.contains(c.phase))
        .copied()
        .collect())
}

/// Narrow an entire view to the selected phases.
pub fn select_view<'a>(
    view: &DatasetView<'a>,
    selection: &PhaseSelection,
) -> Result<DatasetView<'a>, SelectionError> {
    Ok(DatasetView {
        timestamps: view.timestamps,
        channels: select_channels(&view.channels, selection)?,
    })
}
