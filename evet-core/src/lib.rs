//! Core domain types for the evapotranspiration monitoring dashboard.
//!
//! This crate defines the monthly NDWI/NDVI/ET record series, the study
//! area (location + buffer), and the fixed-format CSV export. It is pure
//! data modeling: no widget, DOM, or network code, so it compiles and
//! tests natively as well as on `wasm32-unknown-unknown`.

pub mod export;
pub mod month;
pub mod record;
pub mod study_area;

pub use month::Month;
pub use record::{MonthlyRecord, MonthlySeries, Variable};
pub use study_area::StudyArea;
