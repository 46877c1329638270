//! Latitude/longitude input form for the study area point.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// Coordinate inputs. A change re-parses both fields; if either is not a
/// valid in-range number the update is rejected silently and the map and
/// store keep their prior state.
#[component]
pub fn CoordinateForm() -> Element {
    let mut state = use_context::<AppState>();
    let lat_text = (state.lat_input)();
    let lng_text = (state.lng_input)();

    let apply = move || {
        let lat = state.lat_input.peek().trim().parse::<f64>();
        let lng = state.lng_input.peek().trim().parse::<f64>();
        if let (Ok(lat), Ok(lng)) = (lat, lng) {
            let store = state.store.peek().clone();
            if store.set_location(lat, lng) {
                js_bridge::update_map_view(lat, lng);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Latitude: "
                input {
                    r#type: "text",
                    value: "{lat_text}",
                    style: "width: 90px;",
                    onchange: move |evt: Event<FormData>| {
                        state.lat_input.set(evt.value());
                        apply();
                    },
                }
            }
            label {
                style: "font-weight: bold;",
                "Longitude: "
                input {
                    r#type: "text",
                    value: "{lng_text}",
                    style: "width: 90px;",
                    onchange: move |evt: Event<FormData>| {
                        state.lng_input.set(evt.value());
                        apply();
                    },
                }
            }
        }
    }
}
