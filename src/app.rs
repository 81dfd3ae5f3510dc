use eframe::egui;

use crate::data::parser::embedded_dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};
use crate::view;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MarginScopeApp {
    pub state: AppState,
}

impl eframe::App for MarginScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dashboard title + counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Full recompute from selector state, every frame.
        let (chart, table_spec) = view::build_view(
            embedded_dataset(),
            &self.state.scope(),
            self.state.metric,
            &self.state.color_map,
        );

        // ---- Bottom panel: table ----
        egui::TopBottomPanel::bottom("table_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::margin_table(ui, &table_spec);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::margin_chart(ui, chart.as_ref());
        });
    }
}
