//! Chart Palette Module
//! Fixed color styling shared by every chart surface.

use crate::stats::Metric;
use serde::{Serialize, Serializer};

/// 8-bit RGB color carried through chart configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color form used by JSON chart consumers.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_plotters(&self) -> plotters::style::RGBColor {
        plotters::style::RGBColor(self.r, self.g, self.b)
    }
}

// Serialized as the CSS string, not a struct, so the emitted config matches
// what web chart consumers expect.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

/// Immutable chart color palette.
///
/// Owned by the application and passed explicitly to chart builders; never a
/// process-wide mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub red: Rgb,
    pub orange: Rgb,
    pub yellow: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
    pub purple: Rgb,
    pub grey: Rgb,
}

impl ChartPalette {
    /// The dashboard's classic seven-color palette.
    pub const fn classic() -> Self {
        Self {
            red: Rgb::new(255, 99, 132),
            orange: Rgb::new(255, 159, 64),
            yellow: Rgb::new(255, 205, 86),
            green: Rgb::new(75, 192, 192),
            blue: Rgb::new(54, 162, 235),
            purple: Rgb::new(153, 102, 255),
            grey: Rgb::new(201, 203, 207),
        }
    }

    /// Color assigned to a metric's bars.
    pub fn for_metric(&self, metric: Metric) -> Rgb {
        match metric {
            Metric::Words => self.purple,
            Metric::Chars => self.blue,
            Metric::Accuracy => self.green,
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_matches_web_consumers() {
        assert_eq!(Rgb::new(153, 102, 255).css(), "rgb(153, 102, 255)");
    }

    #[test]
    fn serializes_as_css_string() {
        let json = serde_json::to_value(ChartPalette::classic().purple).unwrap();
        assert_eq!(json, serde_json::json!("rgb(153, 102, 255)"));
    }

    #[test]
    fn words_metric_uses_purple() {
        let palette = ChartPalette::classic();
        assert_eq!(palette.for_metric(Metric::Words), palette.purple);
    }
}
