//! The dataset store: single owner of all mutable dashboard state.
//!
//! `DatasetStore` wraps the monthly series, the study area, and the
//! derived per-variable statistics behind a cheaply cloneable handle
//! (`Rc<RefCell<...>>`), suitable for sharing across components in a
//! single-threaded WASM environment and for direct use from the native
//! CLI. Every mutation that touches the series recomputes the statistics
//! before returning, so readers can never observe stale statistics.
//!
//! # Usage
//!
//! ```rust
//! use evet_store::DatasetStore;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let store = DatasetStore::new();
//! store.set_buffer_radius(5.0);
//! store.refresh_data(&mut StdRng::seed_from_u64(1));
//! let csv = store.export_csv();
//! assert!(csv.starts_with("Month,NDWI,NDVI,ET\n"));
//! ```

use evet_core::{export, MonthlySeries, StudyArea};
use evet_data::refresh::perturb_series;
use evet_data::{DatasetStatistics, Report};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// All mutable application state. Created once at startup from the seed
/// dataset; discarded when the session ends.
#[derive(Debug, Clone, PartialEq)]
struct DatasetState {
    series: MonthlySeries,
    area: StudyArea,
    stats: DatasetStatistics,
}

/// Cloneable handle to the dataset state. Clones share the same
/// underlying state, so a mutation through one handle is visible through
/// every other.
#[derive(Clone)]
pub struct DatasetStore {
    inner: Rc<RefCell<DatasetState>>,
}

impl DatasetStore {
    /// Create a store holding the seed dataset with statistics computed.
    pub fn new() -> Self {
        let series = MonthlySeries::seed();
        let stats = DatasetStatistics::for_series(&series);
        Self {
            inner: Rc::new(RefCell::new(DatasetState {
                series,
                area: StudyArea::seed(),
                stats,
            })),
        }
    }

    /// Move the study area point. Invalid coordinates (non-finite or out
    /// of range) are rejected silently; returns whether the update took.
    pub fn set_location(&self, lat: f64, lng: f64) -> bool {
        self.inner.borrow_mut().area.set_coordinates(lat, lng)
    }

    /// Resize the study area buffer, keeping `area_km2 = PI * km^2`.
    /// Returns whether the update took.
    pub fn set_buffer_radius(&self, km: f64) -> bool {
        self.inner.borrow_mut().area.set_buffer_radius(km)
    }

    /// Perturb the series with the mock refresh and recompute statistics
    /// for all three variables before returning.
    pub fn refresh_data(&self, rng: &mut impl Rng) {
        let mut state = self.inner.borrow_mut();
        perturb_series(&mut state.series, rng);
        state.stats = DatasetStatistics::for_series(&state.series);
        log::info!("[EVET] dataset refreshed, statistics recomputed");
    }

    /// Serialize the current series to CSV text. Pure snapshot; writing
    /// the file is the presentation layer's concern.
    pub fn export_csv(&self) -> String {
        export::to_csv(&self.inner.borrow().series)
    }

    /// Generate an analysis report over the current state.
    pub fn generate_report(&self) -> Report {
        let state = self.inner.borrow();
        Report::generate(&state.series, &state.area)
    }

    // ── Snapshot accessors ──

    pub fn series(&self) -> MonthlySeries {
        self.inner.borrow().series.clone()
    }

    pub fn study_area(&self) -> StudyArea {
        self.inner.borrow().area.clone()
    }

    pub fn statistics(&self) -> DatasetStatistics {
        self.inner.borrow().stats
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evet_core::Variable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_with_seed_dataset_and_fresh_statistics() {
        let store = DatasetStore::new();
        let stats = store.statistics();
        assert_eq!(stats, DatasetStatistics::for_series(&store.series()));
        assert_eq!(store.study_area().name, "Kennedy, Bahia");
    }

    #[test]
    fn clones_share_state() {
        let store = DatasetStore::new();
        let handle = store.clone();
        assert!(store.set_location(-12.5, -41.0));
        assert_eq!(handle.study_area().lat, -12.5);
    }

    #[test]
    fn nan_location_is_rejected() {
        let store = DatasetStore::new();
        let before = store.study_area();
        assert!(!store.set_location(f64::NAN, -40.0));
        assert_eq!(store.study_area(), before);
    }

    #[test]
    fn buffer_radius_updates_area() {
        let store = DatasetStore::new();
        assert!(store.set_buffer_radius(5.0));
        assert!((store.study_area().area_km2 - 78.54).abs() < 0.01);
        assert!(store.set_buffer_radius(0.0));
        assert_eq!(store.study_area().area_km2, 0.0);
    }

    #[test]
    fn refresh_never_leaves_stale_statistics() {
        let store = DatasetStore::new();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            store.refresh_data(&mut rng);
            let series = store.series();
            let stats = store.statistics();
            for variable in Variable::ALL {
                let values = series.values(variable);
                let mean = values.iter().sum::<f64>() / 12.0;
                assert!((stats.get(variable).mean - mean).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn refresh_keeps_et_at_or_above_floor() {
        let store = DatasetStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            store.refresh_data(&mut rng);
            for record in store.series().records() {
                assert!(record.et >= 0.5);
            }
        }
    }

    #[test]
    fn export_matches_current_state() {
        let store = DatasetStore::new();
        let csv = store.export_csv();
        assert_eq!(csv.trim_end().split('\n').count(), 13);
        assert!(csv.contains("Jan,0.1500,0.4500,3.20"));

        store.refresh_data(&mut StdRng::seed_from_u64(5));
        let refreshed = store.export_csv();
        assert_ne!(csv, refreshed, "export reflects the refreshed series");
    }

    #[test]
    fn report_reflects_store_state() {
        let store = DatasetStore::new();
        store.set_buffer_radius(3.0);
        let report = store.generate_report();
        assert_eq!(report.study_area.area_km2, store.study_area().area_km2);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_months\":12"));
    }
}
