//! Charts module - Config construction, palette, static export

mod config;
mod export;
mod palette;

pub use config::{BarStyle, ChartComposer, ChartConfig, ChartKind};
pub use export::ChartExporter;
pub use palette::{ChartPalette, Rgb};
