//! Core dataset types: channels, the shared time axis, and filtered views.
//!
//! A [`Dataset`] is a set of named channels that all share one monotonically
//! increasing timestamp axis. A [`DatasetView`] is a borrowed projection of a
//! dataset (sub-range of the time axis, subset of channels) that the chart
//! layer consumes; views are cheap and rebuilt on every interaction.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, IntoStaticStr};

/// One of the three conductors in a three-phase system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, Serialize, Deserialize)]
pub enum Phase {
    A,
    B,
    C,
}

impl Phase {
    /// All phases in display order.
    pub const ALL: [Phase; 3] = [Phase::A, Phase::B, Phase::C];

    /// The single-letter suffix used in channel names ("Tensão Fase A").
    pub fn suffix(&self) -> &'static str {
        self.into()
    }

    /// Parse a phase from a channel-name suffix token.
    pub fn from_suffix(token: &str) -> Option<Phase> {
        match token {
            "A" => Some(Phase::A),
            "B" => Some(Phase::B),
            "C" => Some(Phase::C),
            _ => None,
        }
    }
}

/// The electrical quantity a channel measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    /// Phase-to-neutral voltage (V)
    PhaseVoltage,
    /// Phase-to-phase voltage (V)
    LineVoltage,
    /// Line current (A)
    Current,
    /// Real power doing work (W)
    ActivePower,
    /// Power oscillating due to phase difference (VAr)
    ReactivePower,
    /// Vector magnitude of active and reactive power (VA)
    ApparentPower,
}

impl Quantity {
    /// Display title for this quantity group ("Tensão de Fase").
    pub fn title(&self) -> &'static str {
        match self {
            Quantity::PhaseVoltage => "Tensão de Fase",
            Quantity::LineVoltage => "Tensão de Linha",
            Quantity::Current => "Corrente",
            Quantity::ActivePower => "Potência Ativa",
            Quantity::ReactivePower => "Potência Reativa",
            Quantity::ApparentPower => "Potência Aparente",
        }
    }

    /// Unit string shown on the Y axis.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::PhaseVoltage | Quantity::LineVoltage => "V",
            Quantity::Current => "A",
            Quantity::ActivePower => "W",
            Quantity::ReactivePower => "VAr",
            Quantity::ApparentPower => "VA",
        }
    }

    /// The stem used to build channel names; the phase suffix is the last
    /// whitespace-separated token, which the selector keys on.
    fn name_stem(&self) -> &'static str {
        match self {
            Quantity::PhaseVoltage => "Tensão Fase",
            Quantity::LineVoltage => "Tensão Linha",
            Quantity::Current => "Corrente",
            Quantity::ActivePower => "Potência Ativa",
            Quantity::ReactivePower => "Potência Reativa",
            Quantity::ApparentPower => "Potência Aparente",
        }
    }

    /// Channel name for this quantity on a given phase, e.g. "Tensão Fase A".
    pub fn channel_name(&self, phase: Phase) -> String {
        format!("{} {}", self.name_stem(), phase.suffix())
    }

    /// Whether this quantity is derived from voltage and current rather than
    /// generated directly.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            Quantity::ActivePower | Quantity::ReactivePower | Quantity::ApparentPower
        )
    }
}

/// A named series aligned to its dataset's timestamp axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    /// Display name, quantity stem plus phase suffix ("Corrente B")
    pub name: String,
    /// Quantity group this channel belongs to
    pub quantity: Quantity,
    /// Phase this channel belongs to
    pub phase: Phase,
    /// One value per dataset timestamp
    pub values: Vec<f64>,
}

impl Channel {
    /// Create a channel with the canonical name for (quantity, phase).
    pub fn new(quantity: Quantity, phase: Phase, values: Vec<f64>) -> Self {
        Self {
            name: quantity.channel_name(phase),
            quantity,
            phase,
            values,
        }
    }
}

/// A multi-channel table over one shared timestamp axis.
///
/// Invariant: every channel holds exactly `timestamps.len()` values, and the
/// timestamps are strictly increasing with no gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// Shared time axis, epoch seconds, strictly increasing
    pub timestamps: Vec<i64>,
    /// Channels aligned to the time axis
    pub channels: Vec<Channel>,
}

impl Dataset {
    /// Create an empty dataset over the given time axis.
    pub fn new(timestamps: Vec<i64>) -> Self {
        Self {
            timestamps,
            channels: Vec::new(),
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Add a channel. Panics if the channel length does not match the time
    /// axis; callers construct channels from the same axis so a mismatch is a
    /// programming error, not a runtime condition.
    pub fn push_channel(&mut self, channel: Channel) {
        assert_eq!(
            channel.values.len(),
            self.timestamps.len(),
            "channel '{}' length does not match time axis",
            channel.name
        );
        self.channels.push(channel);
    }

    /// Find a channel by name.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Find the channel for a (quantity, phase) pair.
    pub fn channel_for(&self, quantity: Quantity, phase: Phase) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|c| c.quantity == quantity && c.phase == phase)
    }

    /// All channels in a quantity group, in phase order.
    pub fn channels_for(&self, quantity: Quantity) -> Vec<&Channel> {
        self.channels
            .iter()
            .filter(|c| c.quantity == quantity)
            .collect()
    }

    /// Full-range view over every channel.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            timestamps: &self.timestamps,
            channels: self
                .channels
                .iter()
                .map(|c| ChannelSlice {
                    name: &c.name,
                    quantity: c.quantity,
                    phase: c.phase,
                    values: &c.values,
                })
                .collect(),
        }
    }
}

/// A borrowed slice of one channel, as exposed by a [`DatasetView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSlice<'a> {
    pub name: &'a str,
    pub quantity: Quantity,
    pub phase: Phase,
    pub values: &'a [f64],
}

/// A filtered projection of a dataset: a sub-range of the time axis and a
/// subset of its channels. Transient; discarded after rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetView<'a> {
    pub timestamps: &'a [i64],
    pub channels: Vec<ChannelSlice<'a>>,
}

impl<'a> DatasetView<'a> {
    /// Number of samples in the view.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the view holds no samples. The chart layer renders a
    /// placeholder for empty views instead of axes.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Channels of one quantity group within this view, in phase order.
    pub fn channels_for(&self, quantity: Quantity) -> Vec<ChannelSlice<'a>> {
        self.channels
            .iter()
            .filter(|c| c.quantity == quantity)
            .copied()
            .collect()
    }

    /// Restrict the view to a sub-range of sample indices.
    pub fn slice(&self, start: usize, end: usize) -> DatasetView<'a> {
        DatasetView {
            timestamps: &self.timestamps[start..end],
            channels: self
                .channels
                .iter()
                .map(|c| ChannelSlice {
                    name: c.name,
                    quantity: c.quantity,
                    phase: c.phase,
                    values: &c.values[start..end],
                })
                .collect(),
        }
    }
}
