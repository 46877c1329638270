//! Process and download action buttons.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionBarProps {
    /// Fired when the user asks to reprocess the dataset.
    pub on_process: EventHandler<()>,
    /// Fired when the user asks to download the CSV export.
    pub on_download: EventHandler<()>,
}

/// The dashboard's two actions. The processing button is disabled while a
/// simulated run is in flight.
#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    let state = use_context::<AppState>();
    let processing = (state.processing)();

    rsx! {
        div {
            style: "margin: 12px 0; display: flex; gap: 12px;",
            button {
                style: "padding: 8px 16px; border-radius: 6px; border: none; \
                        background: #1FB8CD; color: white; cursor: pointer;",
                disabled: processing,
                onclick: move |_| props.on_process.call(()),
                if processing { "Processing..." } else { "Process Data" }
            }
            button {
                style: "padding: 8px 16px; border-radius: 6px; border: 1px solid #1FB8CD; \
                        background: white; color: #1FB8CD; cursor: pointer;",
                onclick: move |_| props.on_download.call(()),
                "Download CSV"
            }
        }
    }
}
