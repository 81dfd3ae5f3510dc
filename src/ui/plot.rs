use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Plot};

use crate::view::ChartSpec;

// ---------------------------------------------------------------------------
// Margin bar chart (central panel)
// ---------------------------------------------------------------------------

/// Fixed y grid: -30% to +30% in 10-point steps.
const TICK_STEP: f64 = 0.10;

fn percent_ticks(_input: GridInput) -> Vec<GridMark> {
    (-3..=3)
        .map(|i| GridMark {
            value: f64::from(i) * TICK_STEP,
            step_size: TICK_STEP,
        })
        .collect()
}

/// Render the bar chart.  An empty view produces no chart at all.
pub fn margin_chart(ui: &mut Ui, spec: Option<&ChartSpec>) {
    let Some(spec) = spec else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No industries in the current selection");
        });
        return;
    };

    ui.heading(&spec.title);
    ui.add_space(4.0);

    Plot::new("margin_chart")
        .legend(Legend::default())
        .y_axis_label(spec.metric_label)
        .y_grid_spacer(percent_ticks)
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format!("{:.0}%", mark.value * 100.0)
        })
        // Bars are identified by the legend, not by x tick labels.
        .x_axis_formatter(|_mark: GridMark, _range: &RangeInclusive<f64>| String::new())
        .include_y(-0.30)
        .include_y(0.30)
        .width(800.0)
        .height(500.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One chart per industry so the legend lists industry names.
            for (i, bar) in spec.bars.iter().enumerate() {
                let shape = Bar::new(i as f64, bar.value)
                    .name(&bar.industry)
                    .width(0.7)
                    .fill(bar.color);
                plot_ui.bar_chart(
                    BarChart::new(vec![shape])
                        .name(&bar.industry)
                        .color(bar.color),
                );
            }
        });
}
