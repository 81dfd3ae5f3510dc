use std::collections::BTreeSet;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{IndustryRecord, MarginDataset};

// ---------------------------------------------------------------------------
// Embedded dataset
// ---------------------------------------------------------------------------

/// The margins table compiled into the binary, exactly as published.
pub const EMBEDDED_CSV: &str = "\
Industry,Gross Profit Margin,Net Profit Margin
Advertising,26.20%,3.10%
Apparel,53.04%,7.06%
Auto,14.25%,3.96%
Alcoholic Beverages,47.99%,5.07%
Broadcasting,45.22%,10.40%
Business & Consumer Services,31.80%,4.97%
Computer Services,27.24%,3.42%
Computers/Peripherals,36.88%,18.72%
Drugs (Biotechnology),62.25%,-0.62%
Drugs (Pharmaceutical),67.35%,11.03%
Education,47.90%,7.17%
Electrical Equipment,33.53%,7.26%
Electronics (Consumer & Office),32.41%,7.08%
Electronics (General),28.40%,7.02%
Engineering/Construction,13.45%,1.81%
Entertainment,41.94%,3.86%
Farming/Agriculture,13.61%,6.03%
Food Processing,27.00%,8.44%
Food Wholesalers,14.85%,0.69%
Furniture,29.74%,7.64%
Green & Renewable Energy,62.92%,-19.78%
Healthcare Products,59.04%,12.92%
Heathcare Information and Technology,52.49%,16.64%
Hotel/Gaming,55.45%,-28.56%
Household Products,50.13%,12.45%
Machinery,35.42%,10.79%
Office Equipment & Services,33.40%,2.55%
Precious Metals,52.43%,14.48%
Publishing & Newspapers,42.65%,3.55%
Restaurant/Dining,31.52%,12.63%
Software (Entertainment),64.45%,29.04%
Software (Internet),61.00%,-10.36%
Software (System & Application),71.59%,19.66%
Tobacco,62.87%,20.58%
Financial,85.08%,32.33%
";

// ---------------------------------------------------------------------------
// Percentage parsing
// ---------------------------------------------------------------------------

/// The one domain error: a margin field that is not a numeric percentage.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("'{0}' is not a numeric percentage")]
    UnparsablePercentage(String),
}

/// Parse `"26.20%"` into the fraction `0.262`.  The trailing `%` is optional;
/// the division by 100 is not.
pub fn parse_percent(field: &str) -> std::result::Result<f64, ParseError> {
    let trimmed = field.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    number
        .parse::<f64>()
        .map(|v| v / 100.0)
        .map_err(|_| ParseError::UnparsablePercentage(field.to_string()))
}

// ---------------------------------------------------------------------------
// Dataset parsing
// ---------------------------------------------------------------------------

/// Parse a CSV text block of `industry,grossPct,netPct` rows.
///
/// Recovery policy:
/// * a margin field that fails [`parse_percent`] becomes `None`, row retained
/// * a row without exactly 3 fields is skipped
/// * a repeated industry name is skipped, first occurrence wins
///
/// Only a structurally unreadable header is fatal.
pub fn parse_dataset(text: &str) -> Result<MarginDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let n_columns = reader.headers().context("reading dataset header")?.len();
    if n_columns != 3 {
        log::warn!("dataset header has {n_columns} columns, expected 3");
    }

    let mut records = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping unreadable row {row_no}: {e}");
                continue;
            }
        };
        if record.len() != 3 {
            log::warn!("skipping row {row_no}: {} fields, expected 3", record.len());
            continue;
        }

        let industry = record[0].to_string();
        if !seen.insert(industry.clone()) {
            log::warn!("skipping row {row_no}: duplicate industry '{industry}'");
            continue;
        }

        let gross_margin = match parse_percent(&record[1]) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("row {row_no} ({industry}), gross margin: {e}");
                None
            }
        };
        let net_margin = match parse_percent(&record[2]) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("row {row_no} ({industry}), net margin: {e}");
                None
            }
        };

        records.push(IndustryRecord {
            industry,
            gross_margin,
            net_margin,
        });
    }

    Ok(MarginDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Process-wide dataset
// ---------------------------------------------------------------------------

static DATASET: OnceLock<MarginDataset> = OnceLock::new();

/// The embedded dataset, parsed on first access and read-only afterwards.
///
/// The fatal path is unreachable for the compiled-in constant; should it ever
/// trigger, the app degrades to an empty dataset instead of panicking.
pub fn embedded_dataset() -> &'static MarginDataset {
    DATASET.get_or_init(|| match parse_dataset(EMBEDDED_CSV) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("embedded dataset failed to parse: {e:#}");
            MarginDataset::default()
        }
    })
}
