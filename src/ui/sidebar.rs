//! Sidebar: page navigation and the display-selection controls.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::PowerScopeApp;
use crate::dataset::Phase;
use crate::filter::TimeWindow;
use crate::state::{AxisRange, Page, TimestampFormat};

impl PowerScopeApp {
    /// Render the whole sidebar: title, navigation, controls, footer.
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.heading("⚡ PowerScope");
        ui.label(
            egui::RichText::new("Supervisório de Técnicas de Medição")
                .size(12.0)
                .color(egui::Color32::GRAY),
        );
        ui.add_space(8.0);
        ui.separator();

        for page in Page::all() {
            if ui
                .radio_value(&mut self.page, page, page.name())
                .changed()
            {
                self.interaction_count += 1;
            }
        }

        ui.separator();

        match self.page {
            Page::Home | Page::General => self.render_display_controls(ui, true),
            Page::Phase(_) => self.render_display_controls(ui, false),
            Page::About => {}
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("Interações: {}", self.interaction_count))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
            if ui.button("Regenerar dados").clicked() {
                self.interaction_count += 1;
                self.refresh_dataset();
            }
        });
    }

    /// Render the display-selection controls. `with_phases` is false on the
    /// per-phase pages, where the page itself fixes the phase.
    fn render_display_controls(&mut self, ui: &mut egui::Ui, with_phases: bool) {
        let mut changed = false;

        egui::CollapsingHeader::new(egui::RichText::new("Período").strong())
            .default_open(true)
            .show(ui, |ui| {
                egui::ComboBox::from_id_salt("time_window")
                    .selected_text(self.selection.window.label())
                    .width(140.0)
                    .show_ui(ui, |ui| {
                        for window in TimeWindow::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.selection.window,
                                    window,
                                    window.label(),
                                )
                                .changed();
                        }
                    });
            });

        if with_phases {
            egui::CollapsingHeader::new(egui::RichText::new("Fases").strong())
                .default_open(true)
                .show(ui, |ui| {
                    for phase in Phase::ALL {
                        changed |= ui
                            .checkbox(
                                self.selection.phases.toggle_mut(phase),
                                format!("Fase {}", phase.suffix()),
                            )
                            .changed();
                    }
                });
        }

        egui::CollapsingHeader::new(egui::RichText::new("Formato de Hora").strong())
            .default_open(false)
            .show(ui, |ui| {
                egui::ComboBox::from_id_salt("timestamp_format")
                    .selected_text(self.selection.format.label())
                    .width(190.0)
                    .show_ui(ui, |ui| {
                        for format in TimestampFormat::iter() {
                            changed |= ui
                                .selectable_value(
                                    &mut self.selection.format,
                                    format,
                                    format.label(),
                                )
                                .changed();
                        }
                    });
            });

        egui::CollapsingHeader::new(egui::RichText::new("Eixos").strong())
            .default_open(false)
            .show(ui, |ui| {
                changed |= render_axis_controls(
                    ui,
                    "Tensão de Fase",
                    &mut self.selection.phase_voltage_axis,
                );
                changed |= render_axis_controls(
                    ui,
                    "Tensão de Linha",
                    &mut self.selection.line_voltage_axis,
                );
                changed |= render_axis_controls(ui, "Corrente", &mut self.selection.current_axis);
            });

        changed |= ui
            .checkbox(&mut self.selection.area_fill, "Preencher área (potências)")
            .changed();

        if changed {
            self.interaction_count += 1;
        }
    }
}

/// Auto/manual toggle plus min/max entry for one quantity's Y axis.
/// Returns true when any widget changed.
fn render_axis_controls(ui: &mut egui::Ui, label: &str, axis: &mut AxisRange) -> bool {
    let mut changed = false;
    ui.label(label);
    ui.horizontal(|ui| {
        changed |= ui.checkbox(&mut axis.auto, "Auto").changed();
        if !axis.auto {
            ui.label("Min:");
            changed |= ui
                .add(egui::DragValue::new(&mut axis.min).speed(1.0))
                .changed();
            ui.label("Max:");
            changed |= ui
                .add(egui::DragValue::new(&mut axis.max).speed(1.0))
                .changed();
        }
    });
    ui.add_space(4.0);
    changed
}
