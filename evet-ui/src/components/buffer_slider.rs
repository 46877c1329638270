//! Buffer radius slider with derived area display.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use evet_core::study_area::buffer_area_km2;

/// Slider controlling the study-area buffer radius (km). Updates the
/// store, resizes the map circle, and shows the derived area.
#[component]
pub fn BufferSlider() -> Element {
    let mut state = use_context::<AppState>();
    let km = (state.buffer_km)();
    let area = buffer_area_km2(km);

    let on_input = move |evt: Event<FormData>| {
        if let Ok(km) = evt.value().parse::<f64>() {
            let store = state.store.peek().clone();
            if store.set_buffer_radius(km) {
                state.buffer_km.set(km);
                js_bridge::update_map_radius(km * 1000.0);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Buffer: "
                input {
                    r#type: "range",
                    min: "0",
                    max: "20",
                    step: "0.5",
                    value: "{km}",
                    oninput: on_input,
                }
            }
            span { "{km} km" }
            span {
                style: "color: #666;",
                {format!("Area: {area:.1} km\u{b2}")}
            }
        }
    }
}
