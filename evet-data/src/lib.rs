//! Pure computation over monthly series: summary statistics, the mock
//! refresh perturbation, the simplified spectral-index ET model, and
//! JSON report generation.
//!
//! Everything here is side-effect free and deterministic given its inputs
//! (the refresh takes an injected `Rng`), so it can be unit tested without
//! a DOM, widget library, or real clock.

pub mod et_model;
pub mod refresh;
pub mod report;
pub mod statistics;

pub use report::Report;
pub use statistics::{DatasetStatistics, SummaryStats};
