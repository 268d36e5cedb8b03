//! Control Panel Widget
//! Left side panel with the dashboard dropdowns and dataset info.

use crate::gui::STRAVA_ORANGE;
use crate::summary::{DashboardOptions, DropdownParams, Granularity};
use egui::{Color32, ComboBox, RichText};

/// Current dropdown selections, always values the option deriver emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selections {
    pub summary: String,
    pub sport: String,
    pub metric: String,
    pub year: String,
}

/// Left side control panel with the four summary dropdowns.
pub struct ControlPanel {
    pub options: DashboardOptions,
    pub selections: Selections,
    file_name: String,
    dataset_info: String,
}

impl ControlPanel {
    pub fn new(options: DashboardOptions, file_name: String, dataset_info: String) -> Self {
        let selections = Selections {
            summary: options.summary.default.clone(),
            sport: options.sport.default.clone(),
            metric: options.metric.default.clone(),
            year: options.year.default.clone(),
        };
        Self {
            options,
            selections,
            file_name,
            dataset_info,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(RichText::new("Strav").size(22.0).color(STRAVA_ORANGE));
                ui.label(RichText::new("Analyzer").size(22.0).color(Color32::WHITE));
            });
            ui.label(
                RichText::new("A useful tool to analyze your Strava activities")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&self.file_name).size(12.0).color(Color32::WHITE));
                ui.label(
                    RichText::new(&self.dataset_info)
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Summary Controls Section =====
        ui.label(RichText::new("🔧 Summary Controls").size(14.0).strong());
        ui.add_space(8.0);

        if Self::dropdown(
            ui,
            "summary_type",
            "Summary Type:",
            &self.options.summary,
            &mut self.selections.summary,
        ) {
            action = ControlPanelAction::SelectionChanged;
        }
        ui.add_space(5.0);

        if Self::dropdown(
            ui,
            "sport",
            "Sport:",
            &self.options.sport,
            &mut self.selections.sport,
        ) {
            action = ControlPanelAction::SelectionChanged;
        }
        ui.add_space(5.0);

        if Self::dropdown(
            ui,
            "metric",
            "Metric:",
            &self.options.metric,
            &mut self.selections.metric,
        ) {
            action = ControlPanelAction::SelectionChanged;
        }
        ui.add_space(5.0);

        // The year only scopes the monthly and weekly views.
        let year_enabled = self.selections.summary != Granularity::Yearly.label();
        ui.add_enabled_ui(year_enabled, |ui| {
            if Self::dropdown(
                ui,
                "year",
                "Year:",
                &self.options.year,
                &mut self.selections.year,
            ) {
                action = ControlPanelAction::SelectionChanged;
            }
        });

        action
    }

    /// Draw one labeled dropdown; true when the selection changed.
    fn dropdown(
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        params: &DropdownParams,
        selected: &mut String,
    ) -> bool {
        let label_width = 100.0;
        let combo_width = 150.0;
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new(label));
            ComboBox::from_id_salt(id)
                .width(combo_width)
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for choice in &params.choices {
                        if ui
                            .selectable_label(*selected == choice.value, &choice.label)
                            .clicked()
                            && *selected != choice.value
                        {
                            *selected = choice.value.clone();
                            changed = true;
                        }
                    }
                });
        });

        changed
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
}
