//! Reusable Dioxus RSX components for the health-map app.

mod attribute_selector;
mod chart_container;
mod chart_header;
mod description_panel;
mod error_display;
mod loading_spinner;

pub use attribute_selector::AttributeSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use description_panel::DescriptionPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
