//! Simplified spectral-index evapotranspiration model.
//!
//! ET is estimated from NDVI and NDWI via two linear factors:
//! a vegetation factor (more vegetation transpires more) and a water
//! availability factor (wetter surfaces evaporate more), scaled to mm/day.
//! This is a demo-grade model, not a surface energy balance.

use evet_core::MonthlySeries;

/// Scale from the combined factors to mm/day.
pub const ET_SCALE_MM_DAY: f64 = 3.5;

/// Vegetation contribution derived from NDVI.
pub fn vegetation_factor(ndvi: f64) -> f64 {
    ndvi * 1.2 + 0.1
}

/// Water availability contribution derived from NDWI.
pub fn water_factor(ndwi: f64) -> f64 {
    ndwi * 0.8 + 1.0
}

/// Estimated daily evapotranspiration (mm/day) for an index pair.
pub fn estimate_et(ndwi: f64, ndvi: f64) -> f64 {
    vegetation_factor(ndvi) * water_factor(ndwi) * ET_SCALE_MM_DAY
}

/// Model ET for every month of the series, for comparison against the
/// recorded ET values.
pub fn estimate_series(series: &MonthlySeries) -> [f64; 12] {
    let records = series.records();
    std::array::from_fn(|i| estimate_et(records[i].ndwi, records[i].ndvi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_january_estimate() {
        // (0.45*1.2 + 0.1) * (0.15*0.8 + 1.0) * 3.5
        let et = estimate_et(0.15, 0.45);
        assert!((et - 2.5088).abs() < 1e-4);
    }

    #[test]
    fn factors_are_linear() {
        assert!((vegetation_factor(0.0) - 0.1).abs() < 1e-12);
        assert!((vegetation_factor(1.0) - 1.3).abs() < 1e-12);
        assert!((water_factor(0.0) - 1.0).abs() < 1e-12);
        assert!((water_factor(-1.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn wetter_and_greener_means_more_et() {
        assert!(estimate_et(0.3, 0.7) > estimate_et(0.1, 0.7));
        assert!(estimate_et(0.3, 0.7) > estimate_et(0.3, 0.5));
    }

    #[test]
    fn series_estimate_is_per_month() {
        let series = MonthlySeries::seed();
        let estimates = estimate_series(&series);
        assert_eq!(estimates.len(), 12);
        assert!((estimates[0] - 2.5088).abs() < 1e-4);
    }
}
