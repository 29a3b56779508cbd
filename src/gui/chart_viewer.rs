//! Chart Viewer Widget
//! Central panel drawing the current bar chart config through egui_plot.

use crate::charts::ChartConfig;
use egui::{RichText, Vec2b};
use egui_plot::{Bar, BarChart, Plot};

pub struct ChartViewer {
    config: Option<ChartConfig>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self { config: None }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the current chart
    pub fn clear(&mut self) {
        self.config = None;
    }

    /// Replace the displayed chart config
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&ChartConfig> {
        self.config.as_ref()
    }

    /// Draw the chart described by the current config.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(config) = &self.config else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };
        let Some(dataset) = config.data.datasets.first() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        let title = &config.options.title;
        if title.display {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&title.text)
                        .size(title.font_size as f32)
                        .strong(),
                );
            });
            ui.add_space(6.0);
        }

        let color = dataset.background_color.to_color32();
        let bars: Vec<Bar> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar::new(i as f64, value).width(0.6).fill(color))
            .collect();
        let chart = BarChart::new(bars).color(color).name(&dataset.label);

        let show_x_grid = config
            .options
            .scales
            .x_axes
            .first()
            .map(|axis| axis.grid_lines.display)
            .unwrap_or(true);
        let show_y_grid = config
            .options
            .scales
            .y_axes
            .first()
            .map(|axis| axis.grid_lines.display)
            .unwrap_or(true);
        let hide_y_ticks = config
            .options
            .scales
            .y_axes
            .first()
            .and_then(|axis| axis.ticks)
            .map(|ticks| !ticks.display)
            .unwrap_or(false);

        let x_labels: Vec<String> = config.data.labels.clone();

        let mut plot = Plot::new("dashboard_bar_chart")
            .height(ui.available_height() - 8.0)
            .show_grid(Vec2b::new(show_x_grid, show_y_grid))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            });
        if hide_y_ticks {
            plot = plot.y_axis_formatter(|_mark, _range| String::new());
        }

        plot.show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
    }
}
