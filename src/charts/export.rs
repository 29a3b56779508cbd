//! Static Chart Export Module
//! Performs the I/O rendering call: draws a chart config to a PNG file
//! through the plotters bitmap backend.

use crate::charts::ChartConfig;
use anyhow::{anyhow, bail, Result};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use std::path::Path;

/// Renders chart configs to static images.
pub struct ChartExporter;

impl ChartExporter {
    /// Render `config` to a PNG file of the given pixel size.
    ///
    /// Fails up front when the output directory is missing, so a bad export
    /// path reads as exactly that instead of a backend write error.
    pub fn export_png(
        config: &ChartConfig,
        output_path: &Path,
        width: u32,
        height: u32,
    ) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                bail!("Output directory not found: {}", parent.display());
            }
        }

        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("Failed to clear drawing area: {e}"))?;

        let title = &config.options.title;
        let labels = &config.data.labels;

        // Nothing to plot: leave a blank, optionally titled surface.
        let Some(dataset) = config.data.datasets.first().filter(|d| !d.data.is_empty()) else {
            if title.display {
                let title_font = ("sans-serif", title.font_size as f64).into_font();
                root.draw(&Text::new(title.text.clone(), (20, 20), title_font))
                    .map_err(|e| anyhow!("Failed to draw title: {e}"))?;
            }
            root.present()
                .map_err(|e| anyhow!("Failed to write chart image: {e}"))?;
            return Ok(());
        };

        let hide_y_ticks = config
            .options
            .scales
            .y_axes
            .first()
            .and_then(|axis| axis.ticks)
            .map(|ticks| !ticks.display)
            .unwrap_or(false);

        let max_value = dataset.data.iter().cloned().fold(f64::MIN, f64::max);
        let min_value = dataset.data.iter().cloned().fold(f64::MAX, f64::min);
        let y_top = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
        let y_bottom = min_value.min(0.0);
        let bar_count = dataset.data.len();

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(if hide_y_ticks { 12 } else { 44 });
        if title.display {
            builder.caption(&title.text, ("sans-serif", title.font_size as f64));
        }
        let mut chart = builder
            .build_cartesian_2d((0..bar_count).into_segmented(), y_bottom..y_top)
            .map_err(|e| anyhow!("Failed to build chart axes: {e}"))?;

        let x_formatter = |seg: &SegmentValue<usize>| match seg {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };
        let blank_y = |_: &f64| String::new();

        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(bar_count.clamp(1, 31))
            .x_label_formatter(&x_formatter);
        if hide_y_ticks {
            mesh.y_label_formatter(&blank_y);
        }
        mesh.draw()
            .map_err(|e| anyhow!("Failed to draw axes: {e}"))?;

        let fill = dataset.background_color.to_plotters().filled();
        chart
            .draw_series(dataset.data.iter().enumerate().map(|(i, &value)| {
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(i), 0.0),
                        (SegmentValue::Exact(i + 1), value),
                    ],
                    fill,
                );
                bar.set_margin(0, 0, 3, 3);
                bar
            }))
            .map_err(|e| anyhow!("Failed to draw bars: {e}"))?;

        if dataset.border_width > 0 {
            let border = dataset
                .border_color
                .to_plotters()
                .stroke_width(dataset.border_width);
            chart
                .draw_series(dataset.data.iter().enumerate().map(|(i, &value)| {
                    let mut outline = Rectangle::new(
                        [
                            (SegmentValue::Exact(i), 0.0),
                            (SegmentValue::Exact(i + 1), value),
                        ],
                        border,
                    );
                    outline.set_margin(0, 0, 3, 3);
                    outline
                }))
                .map_err(|e| anyhow!("Failed to draw bar borders: {e}"))?;
        }

        root.present()
            .map_err(|e| anyhow!("Failed to write chart image: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BarStyle, ChartComposer, ChartPalette};
    use crate::data::SortedSeries;

    fn untitled_empty_config() -> ChartConfig {
        let style = BarStyle::new(ChartPalette::classic().purple);
        let mut config =
            ChartComposer::bar_chart(&SortedSeries::default(), "Words Per Minute", "", &style);
        config.options.title.display = false;
        config
    }

    #[test]
    fn refuses_missing_output_directory() {
        let config = untitled_empty_config();
        let path = Path::new("/nonexistent-wpm-dashboard-dir/chart.png");
        let err = ChartExporter::export_png(&config, path, 320, 200).unwrap_err();
        assert!(err.to_string().contains("Output directory not found"));
    }

    #[test]
    fn writes_png_for_empty_series() {
        let config = untitled_empty_config();
        let path = std::env::temp_dir().join("wpm_dashboard_empty_chart_test.png");
        let _ = std::fs::remove_file(&path);

        ChartExporter::export_png(&config, &path, 320, 200).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
