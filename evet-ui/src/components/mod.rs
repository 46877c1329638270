//! Reusable Dioxus RSX components for the EVET dashboard.

mod action_bar;
mod buffer_slider;
mod chart_container;
mod chart_header;
mod coordinate_form;
mod loading_spinner;
mod metric_cards;
mod notification_banner;
mod stats_table;

pub use action_bar::ActionBar;
pub use buffer_slider::BufferSlider;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use coordinate_form::CoordinateForm;
pub use loading_spinner::LoadingSpinner;
pub use metric_cards::MetricCards;
pub use notification_banner::NotificationBanner;
pub use stats_table::StatsTable;
