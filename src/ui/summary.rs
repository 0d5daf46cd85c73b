//! Numeric summary readouts on the home page.
//!
//! The values shown here are presentation constants, not analytics derived
//! from the generated series; see DESIGN.md.

use eframe::egui;

use crate::app::PowerScopeApp;
use crate::state::{
    SUMMARY_MAX_ACTIVE_KW, SUMMARY_MAX_APPARENT_KVA, SUMMARY_MAX_REACTIVE_KVAR,
    SUMMARY_POWER_FACTOR,
};

impl PowerScopeApp {
    /// Render the "Potências Máximas" / "Fator de Potência" metric row.
    pub fn render_summary_row(&self, ui: &mut egui::Ui) {
        ui.columns(4, |columns| {
            render_metric_card(
                &mut columns[0],
                "Potência Máxima Ativa",
                format!("{SUMMARY_MAX_ACTIVE_KW:.1} kW"),
            );
            render_metric_card(
                &mut columns[1],
                "Potência Máxima Reativa",
                format!("{SUMMARY_MAX_REACTIVE_KVAR:.1} kVAr"),
            );
            render_metric_card(
                &mut columns[2],
                "Potência Máxima Aparente",
                format!("{SUMMARY_MAX_APPARENT_KVA:.1} kVA"),
            );
            render_metric_card(
                &mut columns[3],
                "Fator de Potência",
                format!("{SUMMARY_POWER_FACTOR:.2}"),
            );
        });
    }
}

/// One framed metric card: small gray title over a large value.
fn render_metric_card(ui: &mut egui::Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
            ui.label(egui::RichText::new(value).size(22.0).strong());
        });
    });
}
