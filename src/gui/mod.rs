//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::StravAnalyzerApp;
pub use chart_viewer::{ChartView, ChartViewer, ViewTotals, STRAVA_ORANGE};
pub use control_panel::{ControlPanel, ControlPanelAction};
