//! Dioxus RSX components for the county health map.

mod choropleth_map;
mod county_info_panel;
mod county_modal;
mod demo_banner;
mod error_display;
mod insights_panel;
mod legend;
mod loading_spinner;
mod metric_selector;
mod reset_button;
mod year_slider;

pub use choropleth_map::ChoroplethMap;
pub use county_info_panel::CountyInfoPanel;
pub use county_modal::CountyModal;
pub use demo_banner::DemoModeBanner;
pub use error_display::ErrorDisplay;
pub use insights_panel::InsightsPanel;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use reset_button::ResetButton;
pub use year_slider::YearSlider;
