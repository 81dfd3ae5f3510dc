mod app;
mod color;
mod data;
mod state;
mod ui;
mod view;

use app::MarginScopeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = data::parser::embedded_dataset();
    log::info!("Embedded dataset: {} industries", dataset.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Margin Scope – Profit Margin Dashboard",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(MarginScopeApp::default()))
        }),
    )
}
