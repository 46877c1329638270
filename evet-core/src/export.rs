//! Fixed-format CSV export and parsing for the monthly series.
//!
//! The export format is a stable external contract: header
//! `Month,NDWI,NDVI,ET`, one row per month in calendar order, indices at
//! 4 decimal places, ET at 2, `\n` line endings.

use crate::month::Month;
use crate::record::{MonthlyRecord, MonthlySeries};
use anyhow::{bail, Context};
use std::fmt::Write;

/// Header row of the export format.
pub const CSV_HEADER: &str = "Month,NDWI,NDVI,ET";

/// Fixed file name for the downloaded/exported artifact.
pub const EXPORT_FILE_NAME: &str = "evapotranspiration_data.csv";

/// Serialize the series to CSV text. Pure function of the series; writing
/// the result anywhere is the caller's concern.
pub fn to_csv(series: &MonthlySeries) -> String {
    let mut out = String::with_capacity(32 * 13);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in series.records() {
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{},{:.4},{:.4},{:.2}",
            record.month, record.ndwi, record.ndvi, record.et
        );
    }
    out
}

/// Parse CSV text in the export format back into a series.
///
/// Used for the embedded seed fixture and for CLI report generation from
/// previously exported files.
pub fn parse_csv(csv_data: &str) -> anyhow::Result<MonthlySeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::with_capacity(12);
    for result in rdr.records() {
        let r = result?;
        let month_label = r.get(0).unwrap_or("").trim();
        let month = match Month::from_label(month_label) {
            Some(m) => m,
            None => bail!("unrecognized month label {month_label:?}"),
        };
        let parse_field = |idx: usize, name: &str| -> anyhow::Result<f64> {
            r.get(idx)
                .unwrap_or("")
                .trim()
                .parse::<f64>()
                .with_context(|| format!("bad {name} value for {month}"))
        };
        records.push(MonthlyRecord {
            month,
            ndwi: parse_field(1, "NDWI")?,
            ndvi: parse_field(2, "NDVI")?,
            et: parse_field(3, "ET")?,
        });
    }

    let series = MonthlySeries::from_records(records)?;
    log::info!("[EVET] parsed {} monthly records", series.records().len());
    Ok(series)
}
