//! Transient notification banner.

use crate::state::{AppState, NoticeKind};
use dioxus::prelude::*;

/// Fixed-position banner showing the current notification, if any.
/// The app schedules dismissal; this component only renders.
#[component]
pub fn NotificationBanner() -> Element {
    let state = use_context::<AppState>();
    let notice = (state.notification)();

    rsx! {
        if let Some(notice) = notice {
            div {
                style: format!(
                    "position: fixed; top: 20px; right: 20px; z-index: 1001; \
                     background: {}; color: white; padding: 12px 20px; \
                     border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); \
                     font-weight: 500; max-width: 300px;",
                    match notice.kind {
                        NoticeKind::Success => "#22c55e",
                        NoticeKind::Error => "#ef4444",
                        NoticeKind::Info => "#1FB8CD",
                    }
                ),
                "{notice.text}"
            }
        }
    }
}
