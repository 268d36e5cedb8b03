//! StravAnalyzer - Strava activity export analysis & interactive chart viewer
//!
//! Loads a Strava activity CSV once at startup and serves an interactive
//! summary bar chart over it.

mod data;
mod gui;
mod summary;

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use gui::StravAnalyzerApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = input_path().context("no activity export selected")?;
    let table = data::load_csv(path.to_str().context("input path is not valid UTF-8")?)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("StravAnalyzer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "StravAnalyzer",
        options,
        Box::new(move |cc| Ok(Box::new(StravAnalyzerApp::new(cc, table, file_name)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

/// The export to load: first CLI argument, else ./activities.csv when
/// present, else a file picker.
fn input_path() -> Option<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }
    let fallback = PathBuf::from("activities.csv");
    if fallback.exists() {
        return Some(fallback);
    }
    rfd::FileDialog::new()
        .add_filter("CSV Files", &["csv"])
        .pick_file()
}
