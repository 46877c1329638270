//! JSON report generation.

use evet_core::{export, MonthlySeries, StudyArea};
use evet_data::Report;
use log::info;

/// Build the report JSON, from a previously exported CSV when `input` is
/// given, otherwise from the seed dataset.
pub fn run_report(input: Option<&str>, pretty: bool) -> anyhow::Result<String> {
    let series = match input {
        Some(path) => {
            let csv = std::fs::read_to_string(path)?;
            export::parse_csv(&csv)?
        }
        None => MonthlySeries::seed(),
    };

    let report = Report::generate(&series, &StudyArea::seed());
    info!(
        "Report covers {} months, ET total {:.1} mm",
        report.period.total_months, report.et_total_mm
    );

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_report_is_valid_json() {
        let json = run_report(None, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["period"]["total_months"], 12);
        assert_eq!(value["study_area"]["name"], "Kennedy, Bahia");
    }

    #[test]
    fn report_from_exported_file() {
        let path = std::env::temp_dir().join("evet_report_input.csv");
        std::fs::write(&path, export::to_csv(&MonthlySeries::seed())).unwrap();
        let json = run_report(Some(path.to_str().unwrap()), true).unwrap();
        assert!(json.contains("\"first_month\": \"Jan\""));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_input_file_is_an_error() {
        assert!(run_report(Some("/nonexistent/evet.csv"), false).is_err());
    }
}
