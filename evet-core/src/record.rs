use crate::month::Month;
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Embedded seed dataset: one year of synthetic monthly observations for
/// the default study area.
pub static SEED_CSV: &str = include_str!("../../fixtures/monthly_seed.csv");

/// One of the three tracked variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    Ndwi,
    Ndvi,
    Et,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::Ndwi, Variable::Ndvi, Variable::Et];

    /// Display label for tables and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Variable::Ndwi => "NDWI",
            Variable::Ndvi => "NDVI",
            Variable::Et => "ET (mm/day)",
        }
    }

    /// Decimal places used for this variable in CSV exports.
    pub fn csv_precision(&self) -> usize {
        match self {
            Variable::Ndwi | Variable::Ndvi => 4,
            Variable::Et => 2,
        }
    }
}

/// A single month of observations for the study area.
///
/// NDWI and NDVI are unitless spectral indices, nominally in [-1, 1];
/// ET is evapotranspiration in mm/day, non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: Month,
    pub ndwi: f64,
    pub ndvi: f64,
    pub et: f64,
}

impl MonthlyRecord {
    /// Value of the given variable.
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Ndwi => self.ndwi,
            Variable::Ndvi => self.ndvi,
            Variable::Et => self.et,
        }
    }
}

/// An ordered year of monthly records, Jan through Dec.
///
/// The twelve-entry invariant is carried by the type: records can be
/// mutated in place but never added or removed, and the months always
/// run in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    records: [MonthlyRecord; 12],
}

impl MonthlySeries {
    /// Build a series from exactly twelve records in calendar order.
    pub fn from_records(records: Vec<MonthlyRecord>) -> anyhow::Result<Self> {
        if records.len() != 12 {
            bail!("expected 12 monthly records, got {}", records.len());
        }
        for (record, expected) in records.iter().zip(Month::ALL) {
            if record.month != expected {
                bail!(
                    "records out of calendar order: expected {}, got {}",
                    expected,
                    record.month
                );
            }
        }
        let mut iter = records.into_iter();
        let records = std::array::from_fn(|_| iter.next().expect("length checked above"));
        Ok(Self { records })
    }

    /// The seed dataset embedded at compile time.
    pub fn seed() -> Self {
        crate::export::parse_csv(SEED_CSV).expect("seed fixture is well-formed")
    }

    pub fn records(&self) -> &[MonthlyRecord; 12] {
        &self.records
    }

    /// Mutable access for in-place value replacement.
    pub fn records_mut(&mut self) -> &mut [MonthlyRecord; 12] {
        &mut self.records
    }

    /// The twelve values of one variable, in calendar order.
    pub fn values(&self, variable: Variable) -> [f64; 12] {
        std::array::from_fn(|i| self.records[i].value(variable))
    }

    /// Month labels in series order, for chart x-axes.
    pub fn month_labels(&self) -> [&'static str; 12] {
        std::array::from_fn(|i| self.records[i].month.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_records() -> Vec<MonthlyRecord> {
        Month::ALL
            .into_iter()
            .map(|month| MonthlyRecord {
                month,
                ndwi: 0.1,
                ndvi: 0.5,
                et: 3.0,
            })
            .collect()
    }

    #[test]
    fn seed_has_expected_first_and_last_rows() {
        let series = MonthlySeries::seed();
        let jan = series.records()[0];
        assert_eq!(jan.month, Month::Jan);
        assert_eq!(jan.ndwi, 0.15);
        assert_eq!(jan.ndvi, 0.45);
        assert_eq!(jan.et, 3.2);

        let dec = series.records()[11];
        assert_eq!(dec.month, Month::Dec);
        assert_eq!(dec.et, 4.0);
    }

    #[test]
    fn from_records_rejects_wrong_length() {
        let mut records = flat_records();
        records.pop();
        assert!(MonthlySeries::from_records(records).is_err());
    }

    #[test]
    fn from_records_rejects_out_of_order_months() {
        let mut records = flat_records();
        records.swap(3, 4);
        assert!(MonthlySeries::from_records(records).is_err());
    }

    #[test]
    fn values_follow_calendar_order() {
        let series = MonthlySeries::seed();
        let et = series.values(Variable::Et);
        assert_eq!(et[0], 3.2); // Jan
        assert_eq!(et[7], 1.8); // Aug
        assert_eq!(series.month_labels()[7], "Aug");
    }
}
