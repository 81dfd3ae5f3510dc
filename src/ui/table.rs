use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::view::TableSpec;

// ---------------------------------------------------------------------------
// Margin table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the table.  Always produced, even when the view is empty.
pub fn margin_table(ui: &mut Ui, spec: &TableSpec) {
    ui.add_space(4.0);
    ui.heading(&spec.heading);
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(220.0))
        .column(Column::auto().at_least(150.0))
        .column(Column::auto().at_least(150.0))
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("Industry");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Gross Profit Margin");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Net Profit Margin");
            });
        })
        .body(|mut body| {
            for row in &spec.rows {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.industry);
                    });
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.gross);
                    });
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.net);
                    });
                });
            }
        });
}
