//! PowerScope - An electrical metering supervisory dashboard written in Rust
//!
//! This library generates a synthetic three-phase dataset (voltage, current,
//! and derived power), filters it by trailing time window and phase, and
//! renders it as per-quantity time charts inside an eframe shell.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`dataset`] - Channels, the shared time axis, and filtered views
//! - [`generator`] - Synthetic series generation and dataset memoization
//! - [`power`] - Active/reactive/apparent power derivation
//! - [`filter`] - Trailing time-window filtering
//! - [`selector`] - Per-phase channel selection
//! - [`settings`] - User settings persistence
//! - [`state`] - Display selection types and presentation constants
//! - [`ui`] - User interface components
//!   - `sidebar` - Navigation and display controls
//!   - `chart` - Per-quantity chart rendering
//!   - `pages` - The four logical pages
//!   - `summary` - Numeric summary readouts

pub mod app;
pub mod dataset;
pub mod filter;
pub mod generator;
pub mod power;
pub mod selector;
pub mod settings;
pub mod state;
pub mod ui;
