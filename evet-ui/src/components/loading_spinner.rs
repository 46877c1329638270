//! Startup loading indicator.

use dioxus::prelude::*;

/// Spinner shown while the map and chart libraries initialize. Rendered
/// only before the first mount effect clears `loading`, so it carries its
/// own keyframes instead of relying on a stylesheet.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        style {
            "@keyframes evet-spin {{ to {{ transform: rotate(360deg); }} }}"
        }
        div {
            style: "display: flex; flex-direction: column; justify-content: center; \
                    align-items: center; gap: 12px; padding: 48px; color: #666;",
            div {
                style: "width: 36px; height: 36px; border-radius: 50%; \
                        border: 4px solid #e0e0e0; border-top-color: #2E8B57; \
                        animation: evet-spin 0.8s linear infinite;",
            }
            "Loading study area\u{2026}"
        }
    }
}
