//! Evapotranspiration Monitoring Dashboard
//!
//! Single-page Dioxus web app visualizing synthetic monthly NDWI/NDVI/ET
//! data for one study area: a Leaflet map with the buffered point of
//! interest, a multi-axis time-series chart, two index-vs-ET scatter
//! charts, metric cards, and a summary statistics table.
//!
//! Data flow:
//! 1. `evet-core` embeds the seed CSV at compile time; `DatasetStore::new()`
//!    parses it and computes statistics once on startup.
//! 2. Effect 1 initializes the JS widget layer and the map on mount.
//! 3. Every mutation bumps `data_version`; effect 2 re-serializes the
//!    series and re-renders all three Chart.js charts.
//! 4. "Process Data" simulates a reprocessing run: an awaited timeout,
//!    then a random perturbation of the series with statistics recomputed
//!    before any render can observe them.

use dioxus::prelude::*;
use evet_core::{export, Variable};
use evet_ui::components::{
    ActionBar, BufferSlider, ChartContainer, ChartHeader, CoordinateForm, LoadingSpinner,
    MetricCards, NotificationBanner, StatsTable,
};
use evet_ui::js_bridge;
use evet_ui::state::{AppState, NoticeKind};
use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "study-area-map";
/// Canvas ids for the three Chart.js charts.
const TIME_SERIES_CANVAS_ID: &str = "time-series-chart";
const NDWI_ET_CANVAS_ID: &str = "ndwi-et-chart";
const NDVI_ET_CANVAS_ID: &str = "ndvi-et-chart";

/// Simulated reprocessing latency.
const PROCESSING_DELAY_MS: u32 = 2000;
/// How long a notification stays on screen.
const NOTICE_DISMISS_MS: u32 = 3000;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("evet-root"))
        .launch(App);
}

/// Serialize the series for the time-series chart, plus its axis config.
fn time_series_payload(state: &AppState) -> (String, String) {
    let series = state.store.read().series();
    let data = serde_json::json!({
        "labels": series.month_labels(),
        "ndwi": series.values(Variable::Ndwi),
        "ndvi": series.values(Variable::Ndvi),
        "et": series.values(Variable::Et),
    });
    let config = serde_json::json!({
        "ndwiColor": "#1FB8CD",
        "ndviColor": "#22c55e",
        "etColor": "#FFC185",
        "indexMin": -0.3,
        "indexMax": 0.8,
        "etMin": 0,
        "etMax": 7,
    });
    (data.to_string(), config.to_string())
}

/// Serialize (index, et) pairs for one scatter chart.
fn scatter_payload(state: &AppState, index: Variable) -> (String, String) {
    let series = state.store.read().series();
    let points: Vec<serde_json::Value> = series
        .records()
        .iter()
        .map(|r| serde_json::json!({ "x": r.value(index), "y": r.et }))
        .collect();
    let (index_label, color) = match index {
        Variable::Ndwi => ("NDWI", "#1FB8CD"),
        _ => ("NDVI", "#22c55e"),
    };
    let config = serde_json::json!({
        "label": format!("{index_label} x ET"),
        "color": color,
        "xLabel": index_label,
        "yLabel": "ET (mm/day)",
    });
    (
        serde_json::to_string(&points).unwrap_or_default(),
        config.to_string(),
    )
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: Initialize widgets and map once on mount ───
    use_effect(move || {
        let mut state = state;
        js_bridge::init_widgets();

        let area = state.store.peek().study_area();
        js_bridge::render_map(
            MAP_CONTAINER_ID,
            area.lat,
            area.lng,
            &area.name,
            area.radius_meters(),
        );

        state.loading.set(false);
        web_sys::console::log_1(
            &format!("[EVET Debug] dashboard mounted at ({}, {})", area.lat, area.lng).into(),
        );
    });

    // ─── Effect 2: Re-render charts whenever the dataset changes ───
    use_effect(move || {
        let loading = (state.loading)();
        let _version = (state.data_version)();
        if loading {
            return;
        }

        let (data, config) = time_series_payload(&state);
        js_bridge::render_time_series_chart(TIME_SERIES_CANVAS_ID, &data, &config);

        let (data, config) = scatter_payload(&state, Variable::Ndwi);
        js_bridge::render_scatter_chart(NDWI_ET_CANVAS_ID, &data, &config);

        let (data, config) = scatter_payload(&state, Variable::Ndvi);
        js_bridge::render_scatter_chart(NDVI_ET_CANVAS_ID, &data, &config);
    });

    // ─── Handlers ───
    let on_process = move |_: ()| {
        let mut state = state;
        if (state.processing)() {
            return;
        }
        state.processing.set(true);
        spawn(async move {
            let mut state = state;
            // Simulated processing latency; always runs to completion.
            TimeoutFuture::new(PROCESSING_DELAY_MS).await;

            let store = state.store.peek().clone();
            let mut rng = StdRng::from_entropy();
            store.refresh_data(&mut rng);
            log::info!("[EVET] reprocessing run complete");

            state.processing.set(false);
            state.mark_data_changed();
            let id = state.notify("Data processed successfully!", NoticeKind::Success);
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            state.dismiss(id);
        });
    };

    let on_download = move |_: ()| {
        let mut state = state;
        let csv = state.store.peek().export_csv();
        let ok = js_bridge::download_text_file(export::EXPORT_FILE_NAME, &csv);
        let (text, kind) = if ok {
            ("CSV file downloaded successfully!", NoticeKind::Success)
        } else {
            ("Could not download the CSV file", NoticeKind::Error)
        };
        let id = state.notify(text, kind);
        spawn(async move {
            let mut state = state;
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            state.dismiss(id);
        });
    };

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; \
                    font-family: system-ui, -apple-system, sans-serif;",

            NotificationBanner {}

            h1 {
                style: "font-size: 22px; margin: 0 0 4px 0; color: #2E8B57;",
                "Evapotranspiration Monitoring"
            }
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #666;",
                "Synthetic NDWI/NDVI/ET monthly series for the study area"
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                // Map + controls
                div {
                    id: MAP_CONTAINER_ID,
                    style: "height: 320px; border-radius: 8px; margin-bottom: 8px;",
                }
                CoordinateForm {}
                BufferSlider {}
                ActionBar {
                    on_process: on_process,
                    on_download: on_download,
                }

                MetricCards {}

                // Time series
                ChartHeader {
                    title: "Monthly Time Series".to_string(),
                    unit_description: "Left axis: spectral indices; right axis: ET (mm/day)".to_string(),
                }
                ChartContainer {
                    id: TIME_SERIES_CANVAS_ID.to_string(),
                    loading: (state.loading)(),
                    min_height: 360,
                }

                // Correlation scatter charts
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; margin-top: 16px;",
                    div {
                        style: "flex: 1; min-width: 300px;",
                        ChartHeader { title: "NDWI vs ET".to_string() }
                        ChartContainer {
                            id: NDWI_ET_CANVAS_ID.to_string(),
                            min_height: 280,
                        }
                    }
                    div {
                        style: "flex: 1; min-width: 300px;",
                        ChartHeader { title: "NDVI vs ET".to_string() }
                        ChartContainer {
                            id: NDVI_ET_CANVAS_ID.to_string(),
                            min_height: 280,
                        }
                    }
                }

                // Summary statistics
                div {
                    style: "margin-top: 16px;",
                    ChartHeader {
                        title: "Summary Statistics".to_string(),
                        unit_description: "Std Dev is the population standard deviation".to_string(),
                    }
                    StatsTable {}
                }
            }
        }
    }
}
