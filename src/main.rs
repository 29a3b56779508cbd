//! WPM Dashboard - Typing Session Analysis & Chart Viewer
//!
//! A Rust application for aggregating typing session data and displaying
//! words-per-minute bar charts.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("WPM Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "WPM Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
