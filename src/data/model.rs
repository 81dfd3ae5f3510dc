use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Metric – which margin column is charted
// ---------------------------------------------------------------------------

/// The two margin columns of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    GrossProfitMargin,
    #[default]
    NetProfitMargin,
}

impl Metric {
    /// Dropdown order: net first, matching the default.
    pub const ALL: [Metric; 2] = [Metric::NetProfitMargin, Metric::GrossProfitMargin];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::GrossProfitMargin => "Gross Profit Margin",
            Metric::NetProfitMargin => "Net Profit Margin",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// IndustryRecord – one row of the margins table
// ---------------------------------------------------------------------------

/// A single industry with its margin fractions.
///
/// Margins are fractions (`0.262` for 26.20%).  A field is `None` when the
/// source text did not parse as a numeric percentage; such rows stay in the
/// table but are left out of the chart for that metric.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryRecord {
    pub industry: String,
    pub gross_margin: Option<f64>,
    pub net_margin: Option<f64>,
}

impl IndustryRecord {
    /// The field selected by the given metric.
    pub fn margin(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::GrossProfitMargin => self.gross_margin,
            Metric::NetProfitMargin => self.net_margin,
        }
    }
}

// ---------------------------------------------------------------------------
// MarginDataset – the complete parsed dataset
// ---------------------------------------------------------------------------

/// All industry records, in dataset declaration order.  Immutable after parse.
#[derive(Debug, Clone, Default)]
pub struct MarginDataset {
    pub records: Vec<IndustryRecord>,
}

impl MarginDataset {
    pub fn from_records(records: Vec<IndustryRecord>) -> Self {
        MarginDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct industry names, sorted alphabetically.  This is the set the
    /// industry dropdown offers.
    pub fn industry_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self.records.iter().map(|r| r.industry.as_str()).collect();
        names.into_iter().map(str::to_string).collect()
    }
}

// ---------------------------------------------------------------------------
// Percentage formatting
// ---------------------------------------------------------------------------

/// Format a margin fraction as two-decimal percentage text (`0.262` →
/// `"26.20%"`).  Missing values render as `n/a`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_percent_two_decimals() {
        assert_eq!(format_percent(Some(0.262)), "26.20%");
        assert_eq!(format_percent(Some(0.6287)), "62.87%");
        assert_eq!(format_percent(Some(0.0)), "0.00%");
    }

    #[test]
    fn format_percent_negative() {
        assert_eq!(format_percent(Some(-0.1978)), "-19.78%");
        assert_eq!(format_percent(Some(-0.2856)), "-28.56%");
    }

    #[test]
    fn format_percent_missing() {
        assert_eq!(format_percent(None), "n/a");
    }

    #[test]
    fn metric_selects_field() {
        let rec = IndustryRecord {
            industry: "Tobacco".to_string(),
            gross_margin: Some(0.6287),
            net_margin: Some(0.2058),
        };
        assert_eq!(rec.margin(Metric::GrossProfitMargin), Some(0.6287));
        assert_eq!(rec.margin(Metric::NetProfitMargin), Some(0.2058));
    }

    #[test]
    fn industry_names_sorted_and_distinct() {
        let ds = MarginDataset::from_records(vec![
            IndustryRecord {
                industry: "Tobacco".to_string(),
                gross_margin: None,
                net_margin: None,
            },
            IndustryRecord {
                industry: "Auto".to_string(),
                gross_margin: None,
                net_margin: None,
            },
        ]);
        assert_eq!(ds.industry_names(), vec!["Auto", "Tobacco"]);
    }
}
