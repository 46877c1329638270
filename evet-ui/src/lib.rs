//! Shared Dioxus components and JS bridge for the EVET dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet and Chart.js widgets via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (metric cards, stats table, controls)

pub mod components;
pub mod js_bridge;
pub mod state;
