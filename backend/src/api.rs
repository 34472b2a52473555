//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{LaunchOutcome, LaunchRecord, PayloadRange, SiteSelection, ALL_SITES};
pub use crate::routes::figure::{
    Axis, Figure, FigureLayout, Legend, Marker, PieTrace, ScatterTrace, Title, Trace,
};
pub use crate::routes::layout::{
    DashboardLayout, Dropdown, DropdownOption, Heading, HeadingStyle, RangeSlider, SliderMark,
};
pub use crate::services::pie::{OutcomeCounts, SiteSuccessCount};
pub use crate::services::scatter::BoosterSuccessRate;
