//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map and chart widgets are Leaflet and Chart.js, loaded from the host
//! page. Our glue scripts in `assets/js/*.js` are evaluated as globals
//! (no ES modules) and exposed via `window.*`. This module provides safe
//! Rust wrappers that serialize data and call those globals.

// Embed all widget JS files at compile time
static MAP_JS: &str = include_str!("../assets/js/map.js");
static TIME_SERIES_CHART_JS: &str = include_str!("../assets/js/time-series-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static DOWNLOAD_JS: &str = include_str!("../assets/js/download.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EVET JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize widget scripts with a wait-for-libraries polling loop.
///
/// The glue JS files define functions like `renderTimeSeriesChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once Leaflet (`L`) and Chart.js
/// (`Chart`) are ready, and then explicitly promote each function to
/// `window.*`.
pub fn init_widgets() {
    let all_js = [MAP_JS, TIME_SERIES_CHART_JS, SCATTER_CHART_JS, DOWNLOAD_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__evetWidgetScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__evetWidgetScripts);
                    delete window.__evetWidgetScripts;
                    // Promote function declarations to window explicitly
                    if (typeof initStudyMap !== 'undefined') window.initStudyMap = initStudyMap;
                    if (typeof updateStudyMapView !== 'undefined') window.updateStudyMapView = updateStudyMapView;
                    if (typeof updateStudyMapRadius !== 'undefined') window.updateStudyMapRadius = updateStudyMapRadius;
                    if (typeof renderTimeSeriesChart !== 'undefined') window.renderTimeSeriesChart = renderTimeSeriesChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof destroyEvetChart !== 'undefined') window.destroyEvetChart = destroyEvetChart;
                    if (typeof downloadTextFile !== 'undefined') window.downloadTextFile = downloadTextFile;
                    window.__evetWidgetsReady = true;
                    console.log('EVET widgets initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Initialize the Leaflet map with marker and buffer circle.
///
/// Uses a polling loop to wait for the widget scripts to initialize and
/// the container DOM element to exist before rendering.
pub fn render_map(container_id: &str, lat: f64, lng: f64, name: &str, radius_meters: f64) {
    let name_json = serde_json::to_string(name).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__evetWidgetsReady &&
                    typeof window.initStudyMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initStudyMap('{container_id}', {lat}, {lng}, {name_json}, {radius_meters});
                    }} catch(e) {{ console.error('[EVET] initStudyMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Re-center the map marker and circle after a coordinate edit.
pub fn update_map_view(lat: f64, lng: f64) {
    call_js(&format!(
        "if (window.updateStudyMapView) window.updateStudyMapView({lat}, {lng});"
    ));
}

/// Resize the buffer circle after a slider change.
pub fn update_map_radius(radius_meters: f64) {
    call_js(&format!(
        "if (window.updateStudyMapRadius) window.updateStudyMapRadius({radius_meters});"
    ));
}

/// Render the multi-axis monthly time-series chart.
///
/// Uses a polling loop to wait for the widget scripts to initialize and
/// the canvas element to exist before rendering.
pub fn render_time_series_chart(canvas_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(canvas_id, "renderTimeSeriesChart", data_json, config_json);
}

/// Render an index-vs-ET scatter chart.
pub fn render_scatter_chart(canvas_id: &str, data_json: &str, config_json: &str) {
    render_when_ready(canvas_id, "renderScatterChart", data_json, config_json);
}

fn render_when_ready(canvas_id: &str, function_name: &str, data_json: &str, config_json: &str) {
    // Embed both payloads as JS string literals so quotes survive.
    let data_literal = serde_json::to_string(data_json).unwrap_or_default();
    let config_literal = serde_json::to_string(config_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__evetWidgetsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{canvas_id}', {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[EVET] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Trigger a client-side download of text content. Returns `false` when
/// the widget layer is not ready or the environment cannot download;
/// the caller surfaces that as an error notification.
pub fn download_text_file(filename: &str, contents: &str) -> bool {
    let filename_literal = serde_json::to_string(filename).unwrap_or_default();
    let contents_literal = serde_json::to_string(contents).unwrap_or_default();
    let code = format!(
        "window.downloadTextFile ? window.downloadTextFile({filename_literal}, {contents_literal}) : false"
    );
    match js_sys::eval(&code) {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(e) => {
            log::error!("[EVET] download eval failed: {e:?}");
            false
        }
    }
}

/// Destroy/clean up a chart bound to the given canvas.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.destroyEvetChart) window.destroyEvetChart('{canvas_id}');"
    ));
}
