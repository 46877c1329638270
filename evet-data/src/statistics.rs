//! Summary statistics over a numeric sequence.

use evet_core::{MonthlySeries, Variable};
use serde::Serialize;

/// Summary statistics for one variable over the twelve-month series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divide by N, not N-1).
    pub std: f64,
}

/// Compute mean, extrema, and population standard deviation.
///
/// # Panics
///
/// Panics on empty input. The twelve-entry series invariant makes this
/// unreachable from the dataset store; the assertion exists so a misuse
/// fails loudly instead of yielding NaN.
pub fn compute(values: &[f64]) -> SummaryStats {
    assert!(!values.is_empty(), "statistics require a non-empty sequence");

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    SummaryStats {
        mean,
        min,
        max,
        std: variance.sqrt(),
    }
}

/// Per-variable statistics for the whole dataset, always recomputed as a
/// unit so no variable's statistics can go stale independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetStatistics {
    pub ndwi: SummaryStats,
    pub ndvi: SummaryStats,
    pub et: SummaryStats,
}

impl DatasetStatistics {
    pub fn for_series(series: &MonthlySeries) -> Self {
        Self {
            ndwi: compute(&series.values(Variable::Ndwi)),
            ndvi: compute(&series.values(Variable::Ndvi)),
            et: compute(&series.values(Variable::Et)),
        }
    }

    pub fn get(&self, variable: Variable) -> &SummaryStats {
        match variable {
            Variable::Ndwi => &self.ndwi,
            Variable::Ndvi => &self.ndvi,
            Variable::Et => &self.et,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sequence() {
        let stats = compute(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.std - 1.25_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn population_not_sample_deviation() {
        // Sample (n-1) std of [1,2,3,4] would be sqrt(5/3) ~ 1.291.
        let stats = compute(&[1.0, 2.0, 3.0, 4.0]);
        assert!((stats.std - 1.118).abs() < 1e-3);
    }

    #[test]
    fn constant_sequence_has_zero_std() {
        let stats = compute(&[2.7; 12]);
        // Accumulated rounding keeps the mean within an ulp or two of 2.7,
        // so the deviations (and std) are zero up to float noise.
        assert!(stats.std.abs() < 1e-9);
        assert!((stats.mean - 2.7).abs() < 1e-12);
        assert_eq!(stats.min, stats.max);
    }

    #[test]
    fn single_value() {
        let stats = compute(&[5.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn idempotent() {
        let values = [0.15, -0.2, 0.35, 0.05];
        assert_eq!(compute(&values), compute(&values));
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn empty_input_panics() {
        compute(&[]);
    }

    #[test]
    fn seed_dataset_means() {
        let stats = DatasetStatistics::for_series(&MonthlySeries::seed());
        // Matches the original demo's published statistics.
        assert!((stats.ndwi.mean - 0.1).abs() < 0.01);
        assert!((stats.ndvi.mean - 0.5).abs() < 1e-9);
        assert!((stats.et.mean - 3.54).abs() < 0.01);
        assert_eq!(stats.et.min, 1.8);
        assert_eq!(stats.et.max, 5.8);
    }
}
