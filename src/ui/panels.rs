use eframe::egui::{self, Ui};

use crate::data::filter::filtered_indices;
use crate::data::model::Metric;
use crate::data::parser::embedded_dataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.checkbox(&mut state.select_all, "Select All Industries");

    if !state.select_all {
        ui.add_space(4.0);
        ui.strong("Pick an Industry");
        let names = embedded_dataset().industry_names();
        egui::ComboBox::from_id_salt("industry_pick")
            .selected_text(&state.selected_industry)
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                for name in &names {
                    ui.selectable_value(&mut state.selected_industry, name.clone(), name);
                }
            });
    }

    ui.separator();

    ui.strong("Select Profit Margin Type");
    egui::ComboBox::from_id_salt("metric_pick")
        .selected_text(state.metric.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for metric in Metric::ALL {
                ui.selectable_value(&mut state.metric, metric, metric.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: dashboard title and record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Profit Margin Analysis Dashboard");

        ui.separator();

        let dataset = embedded_dataset();
        let visible = filtered_indices(dataset, &state.scope()).len();
        ui.label(format!("{} industries, {} shown", dataset.len(), visible));
    });
}
