//! The four logical pages, dispatched from the central panel.
//!
//! Every dashboard page runs the same pipeline per frame: take the cached
//! dataset, narrow it to the selected trailing window, narrow the channels to
//! the relevant phases, and hand the resulting view to the chart layer.

use eframe::egui;

use crate::app::PowerScopeApp;
use crate::dataset::{Phase, Quantity};
use crate::selector::{self, PhaseSelection};
use crate::state::AxisRange;

/// Warning shown when no phase checkbox is ticked.
const EMPTY_SELECTION_WARNING: &str =
    "Nenhuma fase selecionada. Marque ao menos uma fase (A, B ou C) para exibir os gráficos.";

/// Y axis used for the derived power charts (always automatic).
fn power_axis() -> AxisRange {
    AxisRange::auto_with_defaults(0.0, 2000.0)
}

impl PowerScopeApp {
    /// "Página Inicial": summary readouts plus every quantity chart.
    pub fn render_home_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("⚡ Supervisório de Técnicas de Medição");
        ui.add_space(8.0);
        self.render_summary_row(ui);
        ui.add_space(8.0);
        ui.separator();

        let dataset = self.dataset();
        let windowed = self.windowed_view(&dataset);
        let selected = match selector::select_view(&windowed, &self.selection.phases) {
            Ok(view) => view,
            Err(_) => {
                render_selection_warning(ui);
                return;
            }
        };

        self.render_quantity_chart(
            ui,
            &selected,
            Quantity::PhaseVoltage,
            self.selection.phase_voltage_axis,
        );
        ui.add_space(12.0);
        self.render_quantity_chart(
            ui,
            &selected,
            Quantity::LineVoltage,
            self.selection.line_voltage_axis,
        );
        ui.add_space(12.0);
        self.render_quantity_chart(ui, &selected, Quantity::Current, self.selection.current_axis);
        ui.add_space(12.0);

        for quantity in [
            Quantity::ActivePower,
            Quantity::ReactivePower,
            Quantity::ApparentPower,
        ] {
            self.render_quantity_chart(ui, &selected, quantity, power_axis());
            ui.add_space(12.0);
        }
    }

    /// "Geral": the three power-kind charts side by side.
    pub fn render_general_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("🖥 Geral");
        ui.add_space(8.0);

        let dataset = self.dataset();
        let windowed = self.windowed_view(&dataset);
        let selected = match selector::select_view(&windowed, &self.selection.phases) {
            Ok(view) => view,
            Err(_) => {
                render_selection_warning(ui);
                return;
            }
        };

        ui.columns(3, |columns| {
            for (column, quantity) in columns.iter_mut().zip([
                Quantity::ActivePower,
                Quantity::ReactivePower,
                Quantity::ApparentPower,
            ]) {
                self.render_quantity_chart(column, &selected, quantity, power_axis());
            }
        });
    }

    /// "Fase A/B/C": one parameterized page showing a single phase's
    /// voltage, current, and power charts.
    pub fn render_phase_page(&mut self, ui: &mut egui::Ui, phase: Phase) {
        ui.heading(format!("Fase {}", phase.suffix()));
        ui.add_space(8.0);

        let dataset = self.dataset();
        let windowed = self.windowed_view(&dataset);
        // A single-phase selection is never empty, so the guard cannot fire.
        let Ok(selected) = selector::select_view(&windowed, &PhaseSelection::only(phase)) else {
            return;
        };

        self.render_quantity_chart(
            ui,
            &selected,
            Quantity::PhaseVoltage,
            self.selection.phase_voltage_axis,
        );
        ui.add_space(12.0);
        self.render_quantity_chart(ui, &selected, Quantity::Current, self.selection.current_axis);
        ui.add_space(12.0);
        self.render_quantity_chart(ui, &selected, Quantity::ActivePower, power_axis());
        ui.add_space(12.0);
        self.render_quantity_chart(ui, &selected, Quantity::ApparentPower, power_axis());
    }

    /// "Sobre": the supervisory-system introduction text.
    pub fn render_about_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sobre o Supervisório");
        ui.add_space(8.0);

        for paragraph in [
            "As despesas com energia elétrica nas atividades comerciais e \
             industriais se apresentam como um dos maiores insumos para o setor \
             produtivo. Em diversos empreendimentos, não há um sistema que indique \
             qual o consumo diário e quais atividades consomem mais energia \
             elétrica, ficando as empresas limitadas às análises das contas de \
             energia elétrica.",
            "A instalação de um Sistema de Monitoramento em tempo real pode \
             auxiliar as empresas nos rastreios dos custos de energia elétrica \
             total ou parcial dos seus processos, auxiliando os empresários no \
             cálculo do custo de energia elétrica agregado a cada produto ou \
             processo.",
            "Um Sistema de Monitoramento de Energia Elétrica com supervisório \
             funciona por meio da coleta e monitoração de dados de consumo de \
             energia elétrica em tempo real, com análise, processamento dos dados \
             e apresentação dos resultados numérica e graficamente, na forma de \
             grandezas energéticas que caracterizam o uso da energia elétrica das \
             instalações.",
        ] {
            ui.label(paragraph);
            ui.add_space(8.0);
        }

        ui.label("Dentre as grandezas básicas monitoradas por um sistema deste tipo estão:");
        for item in [
            "Demandas Ativa, Reativa e Aparente, armazenando os valores máximos ocorridos;",
            "Energias Ativa, Reativa e Aparente;",
            "Fator de Potência, armazenando sua natureza capacitiva ou indutiva \
             bem como valores mínimos ocorridos;",
            "Tensões de linha e de fase; e",
            "Correntes.",
        ] {
            ui.label(format!("• {item}"));
        }
    }
}

/// Amber warning banner for the empty-phase-selection guard.
fn render_selection_warning(ui: &mut egui::Ui) {
    ui.colored_label(
        egui::Color32::from_rgb(253, 193, 73),
        EMPTY_SELECTION_WARNING,
    );
}
