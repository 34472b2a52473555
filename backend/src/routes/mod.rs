pub mod figure;
pub mod layout;

/// Callback name for the site success pie chart
pub const GET_PIE_CHART: &str = "get_pie_chart";
/// Callback name for the payload/outcome scatter chart
pub const GET_SCATTER_CHART: &str = "get_scatter_chart";
/// Name of the layout description
pub const GET_LAYOUT: &str = "get_layout";
