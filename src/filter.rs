//! Trailing time-window filtering.
//!
//! Narrows a [`DatasetView`] to the samples inside a trailing window ending
//! at a reference timestamp. An empty result is a valid view, not an error;
//! the chart layer renders a placeholder for it.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::dataset::DatasetView;

/// The enumerated trailing windows offered by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum TimeWindow {
    Minutes15,
    Hour1,
    Hours6,
    Hours24,
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::Hours24
    }
}

impl TimeWindow {
    /// Display label as shown in the window selector.
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Minutes15 => "15 Minutos",
            TimeWindow::Hour1 => "1 Hora",
            TimeWindow::Hours6 => "6 Horas",
            TimeWindow::Hours24 => "24 Horas",
        }
    }

    /// Window length in seconds.
    pub fn duration_secs(&self) -> i64 {
        match self {
            TimeWindow::Minutes15 => 15 * 60,
            TimeWindow::Hour1 => 60 * 60,
            TimeWindow::Hours6 => 6 * 60 * 60,
            TimeWindow::Hours24 => 24 * 60 * 60,
        }
    }
}

/// Restrict `view` to samples with `timestamp >= now - window`.
///
/// Filtering is idempotent: applying the same or a looser window to an
/// already-filtered view returns the view unchanged.
pub fn trailing_window<'a>(
    view: &DatasetView<'a>,
    now: i64,
    window: TimeWindow,
) -> DatasetView<'a> {
    let cutoff = now - window.duration_secs();
    let start = view.timestamps.partition_point(|&t| t < cutoff);
    view.slice(start, view.len())
}
