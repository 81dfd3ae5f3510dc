use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, Scope};
use crate::data::model::{format_percent, MarginDataset, Metric};

// ---------------------------------------------------------------------------
// Derived view: pure projection of selector state onto render specs
// ---------------------------------------------------------------------------

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub industry: String,
    /// Margin fraction for the charted metric.
    pub value: f64,
    pub color: Color32,
}

/// Everything the chart widget needs, with no egui state attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub metric_label: &'static str,
    pub bars: Vec<BarSpec>,
}

/// One formatted table row.  Both margins are kept even when the charted
/// metric is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowSpec {
    pub industry: String,
    pub gross: String,
    pub net: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub heading: String,
    pub rows: Vec<TableRowSpec>,
}

/// Project the current selections onto chart + table specs.
///
/// Recomputed in full on every call, no caching.  The chart is `None` for an
/// empty view; a record whose charted metric is missing is excluded from the
/// chart but stays in the table.
pub fn build_view(
    dataset: &MarginDataset,
    scope: &Scope,
    metric: Metric,
    colors: &ColorMap,
) -> (Option<ChartSpec>, TableSpec) {
    let indices = filtered_indices(dataset, scope);

    let table = TableSpec {
        heading: format!("Data Table for {scope}"),
        rows: indices
            .iter()
            .map(|&i| {
                let rec = &dataset.records[i];
                TableRowSpec {
                    industry: rec.industry.clone(),
                    gross: format_percent(rec.gross_margin),
                    net: format_percent(rec.net_margin),
                }
            })
            .collect(),
    };

    let chart = if indices.is_empty() {
        None
    } else {
        let bars = indices
            .iter()
            .filter_map(|&i| {
                let rec = &dataset.records[i];
                rec.margin(metric).map(|value| BarSpec {
                    industry: rec.industry.clone(),
                    value,
                    color: colors.color_for(&rec.industry),
                })
            })
            .collect();
        Some(ChartSpec {
            title: format!("{} for {}", metric.label(), scope),
            metric_label: metric.label(),
            bars,
        })
    };

    (chart, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::IndustryRecord;
    use crate::data::parser::embedded_dataset;

    fn colors() -> ColorMap {
        ColorMap::new(&embedded_dataset().industry_names())
    }

    #[test]
    fn all_industries_charts_every_record() {
        let ds = embedded_dataset();
        let (chart, table) =
            build_view(ds, &Scope::AllIndustries, Metric::NetProfitMargin, &colors());

        let chart = chart.unwrap();
        assert_eq!(chart.bars.len(), 35);
        assert_eq!(chart.title, "Net Profit Margin for All Industries");
        assert_eq!(table.heading, "Data Table for All Industries");
        assert_eq!(table.rows.len(), 35);
        assert_eq!(table.rows[0].industry, "Advertising");
        assert_eq!(table.rows[0].gross, "26.20%");
        assert_eq!(table.rows[0].net, "3.10%");
    }

    #[test]
    fn metric_switch_keeps_the_record_set() {
        let ds = embedded_dataset();
        let scope = Scope::Industry("Hotel/Gaming".to_string());
        let (_, net_table) = build_view(ds, &scope, Metric::NetProfitMargin, &colors());
        let (_, gross_table) = build_view(ds, &scope, Metric::GrossProfitMargin, &colors());
        assert_eq!(net_table, gross_table);
    }

    #[test]
    fn metric_switch_changes_charted_values() {
        let ds = embedded_dataset();
        let scope = Scope::Industry("Tobacco".to_string());
        let (net, _) = build_view(ds, &scope, Metric::NetProfitMargin, &colors());
        let (gross, _) = build_view(ds, &scope, Metric::GrossProfitMargin, &colors());
        assert!((net.unwrap().bars[0].value - 0.2058).abs() < 1e-12);
        assert!((gross.unwrap().bars[0].value - 0.6287).abs() < 1e-12);
    }

    #[test]
    fn empty_view_has_no_chart_and_an_empty_table() {
        let ds = embedded_dataset();
        let scope = Scope::Industry("Basket Weaving".to_string());
        let (chart, table) = build_view(ds, &scope, Metric::NetProfitMargin, &colors());
        assert!(chart.is_none());
        assert_eq!(table.heading, "Data Table for Basket Weaving");
        assert!(table.rows.is_empty());
    }

    #[test]
    fn missing_metric_excluded_from_chart_not_table() {
        let ds = MarginDataset::from_records(vec![
            IndustryRecord {
                industry: "Widgets".to_string(),
                gross_margin: Some(0.10),
                net_margin: None,
            },
            IndustryRecord {
                industry: "Gadgets".to_string(),
                gross_margin: Some(0.20),
                net_margin: Some(0.05),
            },
        ]);
        let colors = ColorMap::new(&ds.industry_names());

        let (chart, table) =
            build_view(&ds, &Scope::AllIndustries, Metric::NetProfitMargin, &colors);
        let chart = chart.unwrap();
        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.bars[0].industry, "Gadgets");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].net, "n/a");
        assert_eq!(table.rows[0].gross, "10.00%");
    }

    #[test]
    fn negative_margins_chart_and_format() {
        let ds = embedded_dataset();
        let scope = Scope::Industry("Green & Renewable Energy".to_string());
        let (chart, table) = build_view(ds, &scope, Metric::NetProfitMargin, &colors());
        assert!((chart.unwrap().bars[0].value + 0.1978).abs() < 1e-12);
        assert_eq!(table.rows[0].net, "-19.78%");
    }
}
