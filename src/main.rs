//! PowerScope - An electrical metering supervisory dashboard written in Rust
//!
//! PowerScope is a desktop demonstration of a three-phase energy monitoring
//! supervisory: synthetic voltage, current, and derived power series rendered
//! as filterable time charts.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use powerscope::app::PowerScopeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 1000.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("PowerScope - Supervisório de Medição")
            .with_app_id("PowerScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PowerScope",
        native_options,
        Box::new(|cc| Ok(Box::new(PowerScopeApp::new(cc)))),
    )
}
