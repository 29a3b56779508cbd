//! Chart Config Module
//! Pure construction of declarative bar chart configurations.
//!
//! Nothing here touches a rendering surface: configs are plain values that
//! the interactive viewer, the static exporter, or any JSON consumer render
//! on their own.

use crate::charts::Rgb;
use crate::data::SortedSeries;
use serde::Serialize;

/// Kind of chart described by a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

/// One plotted dataset; `data` is index-aligned with the config's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Rgb,
    pub border_color: Rgb,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLines {
    pub display: bool,
    pub draw_border: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticks {
    pub display: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub grid_lines: GridLines,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
}

impl AxisConfig {
    /// Bare axis: no gridlines, no drawn border, renderer-default ticks.
    fn bare() -> Self {
        Self {
            grid_lines: GridLines {
                display: false,
                draw_border: false,
            },
            ticks: None,
        }
    }

    fn without_ticks() -> Self {
        Self {
            ticks: Some(Ticks { display: false }),
            ..Self::bare()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<AxisConfig>,
    pub y_axes: Vec<AxisConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend: Legend,
    pub title: Title,
    pub scales: Scales,
}

/// Declarative chart description handed to external renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Serialize for JSON chart consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Styling knobs for a bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub color: Rgb,
    pub border_width: u32,
    pub title_font_size: u32,
    /// Suppress y-axis tick labels entirely.
    pub hide_y_ticks: bool,
}

impl BarStyle {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            border_width: 1,
            title_font_size: 16,
            hide_y_ticks: false,
        }
    }
}

/// Builds chart configurations from sorted series.
pub struct ChartComposer;

impl ChartComposer {
    /// Assemble a bar chart config: one dataset with the series values,
    /// bare axes, hidden legend, displayed title, responsive sizing.
    pub fn bar_chart(
        series: &SortedSeries,
        dataset_label: &str,
        title: &str,
        style: &BarStyle,
    ) -> ChartConfig {
        let y_axis = if style.hide_y_ticks {
            AxisConfig::without_ticks()
        } else {
            AxisConfig::bare()
        };

        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: series.labels.clone(),
                datasets: vec![Dataset {
                    label: dataset_label.to_string(),
                    data: series.values.clone(),
                    background_color: style.color,
                    border_color: style.color,
                    border_width: style.border_width,
                }],
            },
            options: ChartOptions {
                responsive: true,
                legend: Legend { display: false },
                title: Title {
                    display: true,
                    text: title.to_string(),
                    font_size: style.title_font_size,
                },
                scales: Scales {
                    x_axes: vec![AxisConfig::bare()],
                    y_axes: vec![y_axis],
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartPalette;
    use crate::data::LabeledSeries;

    fn sample_sorted() -> SortedSeries {
        LabeledSeries::from_pairs([("b", 2.0), ("a", 1.0), ("c", 3.0)])
            .unwrap()
            .sort_by_label()
    }

    fn sample_style() -> BarStyle {
        BarStyle::new(ChartPalette::classic().purple)
    }

    #[test]
    fn construction_is_idempotent() {
        let sorted = sample_sorted();
        let style = sample_style();
        let first = ChartComposer::bar_chart(&sorted, "Words Per Minute", "Today", &style);
        let second = ChartComposer::bar_chart(&sorted, "Words Per Minute", "Today", &style);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_series_builds_empty_config() {
        let sorted = SortedSeries::default();
        let config = ChartComposer::bar_chart(&sorted, "Words Per Minute", "Today", &sample_style());
        assert!(config.data.labels.is_empty());
        assert!(config.data.datasets[0].data.is_empty());
    }

    #[test]
    fn serialized_shape_matches_chart_consumers() {
        let config = ChartComposer::bar_chart(
            &sample_sorted(),
            "Words Per Minute",
            "Today",
            &sample_style(),
        );
        let v = serde_json::to_value(&config).unwrap();

        assert_eq!(v["type"], "bar");
        assert_eq!(v["data"]["labels"][0], "a");
        assert_eq!(v["data"]["datasets"][0]["label"], "Words Per Minute");
        assert_eq!(v["data"]["datasets"][0]["data"][2], 3.0);
        assert_eq!(
            v["data"]["datasets"][0]["backgroundColor"],
            "rgb(153, 102, 255)"
        );
        assert_eq!(v["data"]["datasets"][0]["borderWidth"], 1);
        assert_eq!(v["options"]["responsive"], true);
        assert_eq!(v["options"]["legend"]["display"], false);
        assert_eq!(v["options"]["title"]["text"], "Today");
        assert_eq!(
            v["options"]["scales"]["xAxes"][0]["gridLines"]["display"],
            false
        );
        assert_eq!(
            v["options"]["scales"]["yAxes"][0]["gridLines"]["drawBorder"],
            false
        );
        // Default variant leaves ticks to the renderer.
        assert!(v["options"]["scales"]["yAxes"][0].get("ticks").is_none());
    }

    #[test]
    fn hide_y_ticks_variant_emits_tick_suppression() {
        let mut style = sample_style();
        style.hide_y_ticks = true;
        let config =
            ChartComposer::bar_chart(&sample_sorted(), "Words Per Minute", "Today", &style);
        let v = serde_json::to_value(&config).unwrap();
        assert_eq!(v["options"]["scales"]["yAxes"][0]["ticks"]["display"], false);
        assert!(v["options"]["scales"]["xAxes"][0].get("ticks").is_none());
    }
}
