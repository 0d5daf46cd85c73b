//! Core application state types and constants.
//!
//! This module contains the per-session display state (page, window, phase
//! toggles, axis ranges, timestamp format) and the presentation constants
//! shared across the UI.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use thiserror::Error;

use crate::dataset::Phase;
use crate::filter::TimeWindow;
use crate::selector::PhaseSelection;

// ============================================================================
// Constants
// ============================================================================

/// Default height of a quantity chart in pixels
pub const CHART_HEIGHT: f32 = 260.0;

/// Color palette for chart lines, one entry per phase in A, B, C order
pub const PHASE_COLORS: &[[u8; 3]] = &[
    [71, 108, 155], // Blue (phase A)
    [191, 78, 48],  // Rust orange (phase B)
    [113, 120, 78], // Olive green (phase C)
];

// Summary readouts shown on the home page. These are presentation-only mock
// values and are intentionally NOT derived from the generated series; see
// DESIGN.md for the rationale.
pub const SUMMARY_MAX_ACTIVE_KW: f64 = 3.6;
pub const SUMMARY_MAX_REACTIVE_KVAR: f64 = 1.5;
pub const SUMMARY_MAX_APPARENT_KVA: f64 = 3.9;
pub const SUMMARY_POWER_FACTOR: f64 = 0.92;

// ============================================================================
// Navigation
// ============================================================================

/// The page selected in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// "Página Inicial": the full pipeline dashboard
    Home,
    /// "Geral": the three power-kind charts side by side
    General,
    /// "Fase A/B/C": one parameterized per-phase page
    Phase(Phase),
    /// "Sobre": static introduction text
    About,
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

impl Page {
    /// All pages in sidebar order.
    pub fn all() -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::General];
        pages.extend(Phase::ALL.into_iter().map(Page::Phase));
        pages.push(Page::About);
        pages
    }

    /// Sidebar label for this page.
    pub fn name(&self) -> String {
        match self {
            Page::Home => "Página Inicial".to_string(),
            Page::General => "Geral".to_string(),
            Page::Phase(phase) => format!("Fase {}", phase.suffix()),
            Page::About => "Sobre".to_string(),
        }
    }
}

// ============================================================================
// Display Selection
// ============================================================================

/// The enumerated X-axis timestamp patterns offered by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum TimestampFormat {
    DayMonthHourMinute,
    HourMinuteSecond,
    WeekdayHour,
    MonthDay,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::DayMonthHourMinute
    }
}

impl TimestampFormat {
    /// Display label as shown in the format selector.
    pub fn label(&self) -> &'static str {
        match self {
            TimestampFormat::DayMonthHourMinute => "Dia/Mês Hora:Minuto",
            TimestampFormat::HourMinuteSecond => "Hora:Minuto:Segundo",
            TimestampFormat::WeekdayHour => "Dia da Semana (Abrev), Hora",
            TimestampFormat::MonthDay => "Mês-Dia",
        }
    }

    /// The strftime pattern applied to X-axis tick labels.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::DayMonthHourMinute => "%d/%m %H:%M",
            TimestampFormat::HourMinuteSecond => "%H:%M:%S",
            TimestampFormat::WeekdayHour => "%a, %Hh",
            TimestampFormat::MonthDay => "%m-%d",
        }
    }
}

/// Errors raised by display configuration the widgets cannot prevent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A manual axis range with min at or above max.
    #[error("invalid axis range: min {min} must be below max {max}")]
    InvalidAxisRange { min: f64, max: f64 },
}

/// Y-axis range mode for one quantity group: automatic, or a manual
/// [min, max] pair entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub auto: bool,
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Automatic bounds with editable defaults for when the user switches to
    /// manual mode.
    pub fn auto_with_defaults(min: f64, max: f64) -> Self {
        Self { auto: true, min, max }
    }

    /// The manual bounds, validated, or `None` in auto mode.
    pub fn manual_bounds(&self) -> Result<Option<(f64, f64)>, ConfigError> {
        if self.auto {
            return Ok(None);
        }
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidAxisRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(Some((self.min, self.max)))
    }
}

/// Ephemeral per-session display state, recomputed into views on every
/// interaction. One instance per session; sessions are fully isolated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySelection {
    /// Trailing time window applied to every chart
    pub window: TimeWindow,
    /// Per-phase channel toggles
    pub phases: PhaseSelection,
    /// Y range for the phase-voltage chart
    pub phase_voltage_axis: AxisRange,
    /// Y range for the line-voltage chart
    pub line_voltage_axis: AxisRange,
    /// Y range for the current chart
    pub current_axis: AxisRange,
    /// X-axis timestamp pattern
    pub format: TimestampFormat,
    /// Fill the area under power chart lines
    pub area_fill: bool,
}

impl Default for DisplaySelection {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            phases: PhaseSelection::default(),
            phase_voltage_axis: AxisRange::auto_with_defaults(110.0, 140.0),
            line_voltage_axis: AxisRange::auto_with_defaults(200.0, 240.0),
            current_axis: AxisRange::auto_with_defaults(0.0, 20.0),
            format: TimestampFormat::default(),
            area_fill: false,
        }
    }
}
