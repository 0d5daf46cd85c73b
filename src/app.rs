//! Main application state and the `eframe::App` implementation.
//!
//! The whole UI is re-rendered every frame from two inputs: the immutable
//! cached dataset and the current [`DisplaySelection`]. All session state
//! lives on [`PowerScopeApp`]; there are no globals, and each OS process is
//! one fully isolated session.

use std::sync::Arc;

use eframe::egui;
use tracing::warn;

use crate::dataset::{Dataset, DatasetView};
use crate::filter;
use crate::generator::{DatasetCache, GeneratorConfig};
use crate::power::DEFAULT_POWER_FACTOR;
use crate::settings::UserSettings;
use crate::state::{DisplaySelection, Page};

/// Main application state
pub struct PowerScopeApp {
    /// Memoized datasets keyed on generation parameters
    cache: DatasetCache,
    /// Parameters of the current session's dataset
    generator_config: GeneratorConfig,
    /// Power factor applied to the derived channels
    power_factor: f64,
    /// The session's dataset (shared with the cache)
    dataset: Arc<Dataset>,
    /// Currently selected page
    pub page: Page,
    /// Current display selection
    pub selection: DisplaySelection,
    /// Number of interactions this session, shown in the sidebar footer
    pub interaction_count: u64,
    /// Most recent pipeline error, shown as a banner
    pub last_error: Option<String>,
    /// Persisted preferences
    user_settings: UserSettings,
}

impl PowerScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let user_settings = UserSettings::load();
        let generator_config = GeneratorConfig::with_end(chrono::Utc::now().timestamp());
        let mut cache = DatasetCache::new();

        let (dataset, last_error) =
            match cache.get_or_generate(&generator_config, DEFAULT_POWER_FACTOR) {
                Ok(dataset) => (dataset, None),
                Err(e) => {
                    warn!(error = %e, "dataset generation failed");
                    (Arc::new(Dataset::default()), Some(e.to_string()))
                }
            };

        Self {
            cache,
            generator_config,
            power_factor: DEFAULT_POWER_FACTOR,
            dataset,
            page: user_settings.page,
            selection: user_settings.selection.clone(),
            interaction_count: 0,
            last_error,
            user_settings,
        }
    }

    /// The session's dataset, cheaply shareable with the render pass.
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    /// Reference "now" used for trailing-window filtering: the dataset's end
    /// timestamp, so the selected window is always anchored to the data.
    pub fn reference_time(&self) -> i64 {
        self.generator_config.end
    }

    /// The dataset narrowed to the selected trailing window.
    pub fn windowed_view<'a>(&self, dataset: &'a Dataset) -> DatasetView<'a> {
        filter::trailing_window(
            &dataset.view(),
            self.reference_time(),
            self.selection.window,
        )
    }

    /// Advance the dataset end to the current wall clock and regenerate.
    /// Unchanged parameters hit the cache instead of regenerating.
    pub fn refresh_dataset(&mut self) {
        self.generator_config.end = chrono::Utc::now().timestamp();
        match self
            .cache
            .get_or_generate(&self.generator_config, self.power_factor)
        {
            Ok(dataset) => {
                self.dataset = dataset;
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "dataset generation failed");
                self.last_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for PowerScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("sidebar")
            .default_width(240.0)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if let Some(error) = self.last_error.clone() {
                        ui.colored_label(
                            egui::Color32::from_rgb(135, 30, 28),
                            format!("Erro: {error}"),
                        );
                        ui.add_space(8.0);
                    }

                    match self.page {
                        Page::Home => self.render_home_page(ui),
                        Page::General => self.render_general_page(ui),
                        Page::Phase(phase) => self.render_phase_page(ui, phase),
                        Page::About => self.render_about_page(ui),
                    }
                });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.user_settings.page = self.page;
        self.user_settings.selection = self.selection.clone();
        if let Err(e) = self.user_settings.save() {
            warn!(error = %e, "failed to save settings");
        }
    }
}
