use serde::{Deserialize, Serialize};

// =========================================================
// Page layout types
// =========================================================

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";
pub const SUCCESS_PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Everything the page needs to render its controls before the first callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub heading: Heading,
    pub site_dropdown: Dropdown,
    pub slider_label: String,
    pub payload_slider: RangeSlider,
    pub pie_chart_id: String,
    pub scatter_chart_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub style: HeadingStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub marks: Vec<SliderMark>,
    /// Initial `[low, high]` selection.
    pub value: [i64; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: i64,
    pub label: String,
}
