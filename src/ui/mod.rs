//! UI rendering modules for the PowerScope application.
//!
//! - `sidebar` - Navigation and the display-selection controls
//! - `chart` - Per-quantity chart rendering (legend, axes, placeholder)
//! - `pages` - The four logical pages (home, general, per-phase, about)
//! - `summary` - Numeric summary readouts on the home page

pub mod chart;
pub mod pages;
pub mod sidebar;
pub mod summary;
