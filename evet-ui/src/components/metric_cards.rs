//! Headline metric cards: the mean of each tracked variable.

use crate::state::AppState;
use dioxus::prelude::*;

/// Three summary cards showing the current mean NDWI, NDVI, and ET.
/// Reads the data version signal so the cards re-render on every refresh.
#[component]
pub fn MetricCards() -> Element {
    let state = use_context::<AppState>();
    // Subscribe to dataset mutations.
    let _version = (state.data_version)();
    let stats = state.store.read().statistics();

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 8px 0;",
            MetricCard { label: "Mean NDWI".to_string(), value: format!("{:.3}", stats.ndwi.mean) }
            MetricCard { label: "Mean NDVI".to_string(), value: format!("{:.3}", stats.ndvi.mean) }
            MetricCard { label: "Mean ET (mm/day)".to_string(), value: format!("{:.2}", stats.et.mean) }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetricCardProps {
    label: String,
    value: String,
}

#[component]
fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 140px; padding: 12px 16px; border-radius: 8px; \
                    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
                    color: white; text-align: center;",
            div {
                style: "font-size: 12px; opacity: 0.9;",
                "{props.label}"
            }
            div {
                style: "font-size: 22px; font-weight: bold; margin-top: 4px;",
                "{props.value}"
            }
        }
    }
}
