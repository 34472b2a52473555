//! Service layer for the dashboard callbacks.
//!
//! Each service takes the immutable [`LaunchTable`](crate::data::LaunchTable)
//! plus the current control values and returns a figure or layout DTO.

pub mod format;
pub mod layout;
pub mod pie;
pub mod scatter;

pub use layout::{build_layout, initial_payload_window};
pub use pie::{compute_outcome_counts, compute_site_success_counts, get_pie_chart};
pub use scatter::{compute_booster_success_rates, filter_launches, get_scatter_chart};
