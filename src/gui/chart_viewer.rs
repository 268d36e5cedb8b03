//! Chart Viewer Widget
//! Central panel drawing the summary bar chart with egui_plot.

use crate::summary::{compute_pace, s_to_hms, Bucket};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

/// Bar and accent color, the dashboard's Strava orange (#ea580a).
pub const STRAVA_ORANGE: Color32 = Color32::from_rgb(234, 88, 10);

/// Everything the viewer needs to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub buckets: Vec<Bucket>,
    /// Durations get an h:mm:ss y-axis.
    pub duration_axis: bool,
    pub totals: ViewTotals,
}

/// Distance and moving time summed over the charted selection.
#[derive(Debug, Clone, Copy)]
pub struct ViewTotals {
    pub distance_m: f64,
    pub moving_time_s: f64,
}

/// Central chart display area.
pub struct ChartViewer {
    view: Option<ChartView>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self { view: None }
    }

    pub fn set_view(&mut self, view: ChartView) {
        self.view = Some(view);
    }

    /// Draw the current chart, or a placeholder for an empty series.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        if view.buckets.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("No activities for this selection")
                        .size(16.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        }

        Self::draw_chart_card(ui, view);
    }

    fn draw_chart_card(ui: &mut egui::Ui, view: &ChartView) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(60)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&view.title)
                            .size(18.0)
                            .strong()
                            .color(STRAVA_ORANGE),
                    );
                    ui.add_space(8.0);

                    let plot_height = (ui.available_height() - 40.0).max(200.0);
                    let x_labels: Vec<String> =
                        view.buckets.iter().map(|b| b.label.clone()).collect();

                    let bars: Vec<Bar> = view
                        .buckets
                        .iter()
                        .enumerate()
                        .map(|(i, bucket)| {
                            Bar::new(i as f64, bucket.value)
                                .width(0.7)
                                .name(&bucket.label)
                                .fill(STRAVA_ORANGE)
                        })
                        .collect();

                    let mut plot = Plot::new("summary_chart")
                        .height(plot_height)
                        .allow_scroll(false)
                        .include_y(0.0)
                        .x_axis_label(&view.x_label)
                        .y_axis_label(&view.y_label)
                        .x_axis_formatter(move |mark, _range| {
                            // Only integral marks carry a bucket label.
                            let idx = mark.value.round() as usize;
                            if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                                x_labels[idx].clone()
                            } else {
                                String::new()
                            }
                        });
                    if view.duration_axis {
                        plot = plot.y_axis_formatter(|mark, _range| {
                            if mark.value < 0.0 {
                                String::new()
                            } else {
                                s_to_hms(mark.value)
                            }
                        });
                    }

                    plot.show(ui, |plot_ui| {
                        plot_ui.bar_chart(BarChart::new(bars));
                    });

                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(Self::totals_line(&view.totals))
                            .size(12.0)
                            .color(Color32::GRAY),
                    );
                });
            });
    }

    fn totals_line(totals: &ViewTotals) -> String {
        let (speed_kmh, pace) = compute_pace(totals.distance_m, totals.moving_time_s);
        format!(
            "Totals: {:.1} km · {} moving · {:.1} km/h ({})",
            totals.distance_m / 1000.0,
            s_to_hms(totals.moving_time_s),
            speed_kmh,
            pace.trim_start()
        )
    }
}
