//! StravAnalyzer Main Application
//! Main window wiring the control panel, the aggregation and the chart.

use crate::data::{ActivityTable, Metric};
use crate::gui::{ChartView, ChartViewer, ControlPanel, ControlPanelAction, ViewTotals};
use crate::summary::{compute_series, DashboardOptions, Granularity};
use egui::SidePanel;

/// Main application window. Owns the read-only activity table for the
/// lifetime of the session.
pub struct StravAnalyzerApp {
    table: ActivityTable,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl StravAnalyzerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: ActivityTable, file_name: String) -> Self {
        let options = DashboardOptions::derive(&table);
        let control_panel = ControlPanel::new(options, file_name, dataset_info(&table));
        let mut app = Self {
            table,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.recompute();
        app
    }

    /// One full synchronous recomputation of the charted series.
    fn recompute(&mut self) {
        let selections = self.control_panel.selections.clone();
        let buckets = compute_series(
            &self.table,
            &selections.summary,
            &selections.sport,
            &selections.metric,
            &selections.year,
        );

        // Footer totals over the same scope as the chart.
        let distance_m = compute_series(
            &self.table,
            &selections.summary,
            &selections.sport,
            Metric::Distance.label(),
            &selections.year,
        )
        .iter()
        .map(|b| b.value)
        .sum();
        let moving_time_s = compute_series(
            &self.table,
            &selections.summary,
            &selections.sport,
            Metric::MovingTime.label(),
            &selections.year,
        )
        .iter()
        .map(|b| b.value)
        .sum();

        let x_label = Granularity::from_label(&selections.summary)
            .map(|g| g.axis_label().to_string())
            .unwrap_or_default();
        let duration_axis = Metric::from_label(&selections.metric)
            .map(|m| m.is_duration())
            .unwrap_or(false);

        self.chart_viewer.set_view(ChartView {
            title: format!("{} by {}", selections.metric, x_label),
            x_label,
            y_label: selections.metric.clone(),
            buckets,
            duration_axis,
            totals: ViewTotals {
                distance_m,
                moving_time_s,
            },
        });
    }
}

fn dataset_info(table: &ActivityTable) -> String {
    match table.date_range() {
        Some((first, last)) => format!(
            "{} activities · {} - {}",
            table.len(),
            first.format("%b %Y"),
            last.format("%b %Y")
        ),
        None => "0 activities".to_string(),
    }
}

impl eframe::App for StravAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);
                    if action == ControlPanelAction::SelectionChanged {
                        self.recompute();
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
