//! WPM Dashboard Application
//! Main window wiring session loading, aggregation and the chart surfaces.

use crate::charts::{BarStyle, ChartComposer, ChartExporter, ChartPalette};
use crate::data::{LabeledSeries, Session, SessionLoader};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::StatsAggregator;
use egui::SidePanel;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(DataFrame),
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    loader: SessionLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    palette: ChartPalette,

    sessions: Vec<Session>,
    /// Mapping loaded directly from a JSON object; bypasses aggregation.
    direct_series: Option<LabeledSeries>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: SessionLoader::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            palette: ChartPalette::classic(),
            sessions: Vec::new(),
            direct_series: None,
            load_rx: None,
            is_loading: false,
        };
        app.rebuild_chart();
        app
    }

    /// Handle data file selection: sessions CSV or a JSON label mapping.
    fn handle_browse_data(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Data Files", &["csv", "json"])
            .pick_file()
        else {
            return;
        };

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            self.load_json_series(&path);
        } else {
            self.start_csv_load(path);
        }
    }

    /// Load a JSON object of label -> value as the chart series directly.
    fn load_json_series(&mut self, path: &Path) {
        let result = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| LabeledSeries::from_json_str(&text).map_err(|e| e.to_string()));

        match result {
            Ok(series) => {
                self.control_panel.settings.data_path = Some(path.to_path_buf());
                self.control_panel.session_count = 0;
                self.control_panel
                    .set_progress(100.0, &format!("Loaded mapping with {} labels", series.len()));
                self.sessions.clear();
                self.direct_series = Some(series);
                self.rebuild_chart();
            }
            Err(e) => {
                self.control_panel.set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }

    /// Load a sessions CSV in a background thread.
    fn start_csv_load(&mut self, path: PathBuf) {
        self.chart_viewer.clear();
        self.control_panel.settings.data_path = Some(path.clone());
        self.control_panel.set_progress(0.0, "Loading sessions CSV...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let path_str = path.to_string_lossy().to_string();

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            let result = LazyCsvReader::new(&path_str)
                .with_infer_schema_length(Some(10000))
                .with_ignore_errors(true)
                .finish()
                .and_then(|lazy| lazy.collect());

            match result {
                Ok(df) => {
                    let _ = tx.send(LoadResult::Complete(df));
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(0.0, &status);
                    }
                    LoadResult::Complete(df) => {
                        self.loader.set_dataframe(df);
                        match self.loader.extract_sessions() {
                            Ok(sessions) => {
                                self.control_panel.set_progress(
                                    100.0,
                                    &format!(
                                        "Loaded {} sessions from {} rows",
                                        sessions.len(),
                                        self.loader.get_row_count()
                                    ),
                                );
                                self.control_panel.session_count = sessions.len();
                                self.direct_series = None;
                                self.sessions = sessions;
                                self.rebuild_chart();
                            }
                            Err(e) => {
                                self.control_panel
                                    .set_progress(0.0, &format!("Error: {}", e));
                            }
                        }
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Rebuild the chart config from the current data source and settings.
    fn rebuild_chart(&mut self) {
        let metric = self.control_panel.settings.metric;
        let period = self.control_panel.settings.period;

        let series = if let Some(direct) = &self.direct_series {
            Ok(direct.clone())
        } else if self.sessions.is_empty() {
            StatsAggregator::placeholder_month()
        } else {
            let now = chrono::Local::now().naive_local();
            StatsAggregator::aggregate_all(&self.sessions, period, now)
                .map(|mut by_metric| by_metric.remove(&metric).unwrap_or_default())
        };

        let series = match series {
            Ok(series) => series,
            Err(e) => {
                self.control_panel.set_progress(0.0, &format!("Error: {}", e));
                return;
            }
        };

        let sorted = series.sort_by_label();

        let mut style = BarStyle::new(self.palette.for_metric(metric));
        style.hide_y_ticks = self.control_panel.settings.hide_y_ticks;

        let title = format!("{} ({})", metric.label(), period.label());
        let config = ChartComposer::bar_chart(&sorted, metric.label(), &title, &style);
        self.chart_viewer.set_config(config);
    }

    /// Handle PNG export: render the current config and open the result.
    fn handle_export_png(&mut self) {
        let Some(config) = self.chart_viewer.config().cloned() else {
            self.control_panel.set_progress(0.0, "No chart to export");
            return;
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("wpm_chart.png")
            .save_file()
        else {
            return; // User cancelled
        };

        self.control_panel.set_progress(50.0, "Rendering chart...");

        match ChartExporter::export_png(&config, &output_path, 1200, 700) {
            Ok(()) => {
                self.control_panel
                    .set_progress(100.0, &format!("Exported {}", output_path.display()));
                let _ = open::that(&output_path);
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Export error: {}", e));
            }
        }
    }

    /// Handle JSON export: serialize the current config for web consumers.
    fn handle_export_json(&mut self) {
        let Some(config) = self.chart_viewer.config().cloned() else {
            self.control_panel.set_progress(0.0, "No chart to export");
            return;
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("wpm_chart.json")
            .save_file()
        else {
            return; // User cancelled
        };

        let result = config
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&output_path, json).map_err(|e| e.to_string()));

        match result {
            Ok(()) => {
                self.control_panel
                    .set_progress(100.0, &format!("Exported {}", output_path.display()));
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Export error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseData => self.handle_browse_data(),
                        ControlPanelAction::SettingsChanged => self.rebuild_chart(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
