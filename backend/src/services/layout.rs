use tracing::debug;

use crate::config::DashboardSettings;
use crate::data::LaunchTable;
use crate::models::ALL_SITES;
use crate::routes::layout::{
    DashboardLayout, Dropdown, DropdownOption, Heading, HeadingStyle, RangeSlider, SliderMark,
    PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID, SUCCESS_PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID,
};
use crate::routes::GET_LAYOUT;

/// Build the page layout from the loaded sites and payload bounds.
pub fn build_layout(table: &LaunchTable, settings: &DashboardSettings) -> DashboardLayout {
    debug!("{} for {} sites", GET_LAYOUT, table.sites().len());

    let options = std::iter::once(DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(table.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect();

    let marks = (settings.slider_min..=settings.slider_max)
        .step_by(settings.slider_step.max(1) as usize)
        .map(|value| SliderMark {
            value,
            label: value.to_string(),
        })
        .collect();

    DashboardLayout {
        heading: Heading {
            text: settings.title.clone(),
            style: HeadingStyle {
                text_align: "center".to_string(),
                color: "#503D36".to_string(),
                font_size: 40,
            },
        },
        site_dropdown: Dropdown {
            id: SITE_DROPDOWN_ID.to_string(),
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here".to_string(),
            searchable: true,
        },
        slider_label: "Payload range (Kg):".to_string(),
        payload_slider: RangeSlider {
            id: PAYLOAD_SLIDER_ID.to_string(),
            min: settings.slider_min,
            max: settings.slider_max,
            step: settings.slider_step,
            marks,
            value: initial_payload_window(table),
        },
        pie_chart_id: SUCCESS_PIE_CHART_ID.to_string(),
        scatter_chart_id: SUCCESS_PAYLOAD_SCATTER_CHART_ID.to_string(),
    }
}

/// Slider start position: the dataset's payload bounds truncated to whole kilograms.
pub fn initial_payload_window(table: &LaunchTable) -> [i64; 2] {
    [
        table.payload_min().value().trunc() as i64,
        table.payload_max().value().trunc() as i64,
    ]
}
