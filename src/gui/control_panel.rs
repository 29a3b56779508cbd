//! Control Panel Widget
//! Left side panel with data source, metric and period controls.

use crate::stats::{Metric, Period};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// User settings for the dashboard chart
#[derive(Clone)]
pub struct UserSettings {
    pub data_path: Option<PathBuf>,
    pub metric: Metric,
    pub period: Period,
    pub hide_y_ticks: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            data_path: None,
            metric: Metric::Words,
            period: Period::Monthly,
            hide_y_ticks: false,
        }
    }
}

/// Left side control panel with file selection and chart controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub progress: f32,
    pub status: String,
    pub session_count: usize,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            progress: 0.0,
            status: "Ready".to_string(),
            session_count: 0,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⌨ WPM Dashboard")
                    .size(22.0)
                    .color(Color32::from_rgb(153, 102, 255)),
            );
            ui.label(
                RichText::new("Typing Statistics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .data_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "Placeholder data".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.data_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseData;
                        }
                    });
                });
            });

        if self.session_count > 0 {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} sessions loaded", self.session_count))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Metric Section =====
        ui.label(RichText::new("📈 Metric").size(14.0).strong());
        ui.add_space(5.0);

        for metric in crate::stats::ALL_METRICS {
            if ui
                .radio_value(&mut self.settings.metric, metric, metric.label())
                .changed()
            {
                action = ControlPanelAction::SettingsChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Period Section =====
        ui.label(RichText::new("📅 Period").size(14.0).strong());
        ui.add_space(5.0);

        for period in [Period::Daily, Period::Weekly, Period::Monthly] {
            if ui
                .radio_value(&mut self.settings.period, period, period.label())
                .changed()
            {
                action = ControlPanelAction::SettingsChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Display Options =====
        ui.label(RichText::new("🔧 Display").size(14.0).strong());
        ui.add_space(5.0);

        if ui
            .checkbox(&mut self.settings.hide_y_ticks, "Hide y-axis tick labels")
            .changed()
        {
            action = ControlPanelAction::SettingsChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(png_button).clicked() {
                action = ControlPanelAction::ExportPng;
            }

            ui.add_space(8.0);

            // Chart config as JSON, for web chart consumers
            let json_button = egui::Button::new(RichText::new("📝 Export JSON").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(json_button).clicked() {
                action = ControlPanelAction::ExportJson;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseData,
    SettingsChanged,
    ExportPng,
    ExportJson,
}
