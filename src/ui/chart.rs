//! Chart rendering and data preparation.
//!
//! One chart per quantity group: a line per selected phase, the channel name
//! in the legend, X ticks formatted with the selected timestamp pattern, and
//! the Y range forced only when the user switched that axis to manual. Empty
//! views render a placeholder instead of axes.

use chrono::{DateTime, Local};
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::app::PowerScopeApp;
use crate::dataset::{DatasetView, Phase, Quantity};
use crate::state::{AxisRange, TimestampFormat, CHART_HEIGHT, PHASE_COLORS};

/// Message shown in place of axes when a view holds no samples.
pub const EMPTY_VIEW_MESSAGE: &str = "Sem dados para exibir";

/// One plottable line: a channel narrowed to the current view.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub phase: Phase,
    pub points: Vec<[f64; 2]>,
}

/// Build the plottable lines for one quantity group of a view.
///
/// Returns an empty vector for an empty view (or a view with none of this
/// quantity's channels); the caller renders the placeholder in that case.
pub fn chart_series(view: &DatasetView<'_>, quantity: Quantity) -> Vec<ChartSeries> {
    view.channels_for(quantity)
        .into_iter()
        .map(|channel| ChartSeries {
            name: channel.name.to_string(),
            phase: channel.phase,
            points: view
                .timestamps
                .iter()
                .zip(channel.values.iter())
                .map(|(&t, &v)| [t as f64, v])
                .collect(),
        })
        .filter(|series| !series.points.is_empty())
        .collect()
}

/// Format one X-axis timestamp (epoch seconds) with the selected pattern.
pub fn format_tick(timestamp: f64, format: TimestampFormat) -> String {
    let secs = timestamp.floor() as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format(format.pattern())
            .to_string(),
        None => format!("{timestamp:.0}"),
    }
}

impl PowerScopeApp {
    /// Render the chart for one quantity group of `view`.
    pub fn render_quantity_chart(
        &self,
        ui: &mut egui::Ui,
        view: &DatasetView<'_>,
        quantity: Quantity,
        axis: AxisRange,
    ) {
        ui.label(egui::RichText::new(quantity.title()).strong().size(15.0));

        let series = chart_series(view, quantity);
        if series.is_empty() {
            render_placeholder(ui);
            return;
        }

        // A malformed manual range is a configuration error; surface it in
        // place of the chart instead of feeding it to the plot.
        let manual_bounds = match axis.manual_bounds() {
            Ok(bounds) => bounds,
            Err(e) => {
                ui.colored_label(egui::Color32::from_rgb(135, 30, 28), e.to_string());
                return;
            }
        };

        let format = self.selection.format;
        let fill = self.selection.area_fill && quantity.is_derived();
        let x_range = (
            series[0].points[0][0],
            series[0].points[series[0].points.len() - 1][0],
        );

        let plot = Plot::new(format!("chart_{}", quantity.title()))
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .y_axis_label(quantity.unit())
            .x_axis_formatter(move |mark, _range| format_tick(mark.value, format));

        plot.show(ui, |plot_ui| {
            if let Some((y_min, y_max)) = manual_bounds {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [x_range.0, y_min],
                    [x_range.1, y_max],
                ));
            }

            for line_series in &series {
                let color = PHASE_COLORS[line_series.phase as usize % PHASE_COLORS.len()];
                let points: PlotPoints = line_series.points.iter().copied().collect();
                let mut line = Line::new(line_series.name.clone(), points)
                    .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                    .width(1.5);
                if fill {
                    line = line.fill(0.0);
                }
                plot_ui.line(line);
            }
        });
    }
}

/// Centered gray placeholder occupying the chart slot.
fn render_placeholder(ui: &mut egui::Ui) {
    ui.add_sized(
        [ui.available_width(), CHART_HEIGHT],
        egui::Label::new(
            egui::RichText::new(EMPTY_VIEW_MESSAGE)
                .size(18.0)
                .color(egui::Color32::GRAY),
        ),
    );
}
