//! Data Transfer Objects for the HTTP API.
//!
//! Figure and layout DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{DashboardLayout, Figure};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// SHA-256 of the launch CSV
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

/// Query parameters for the pie chart callback.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieChartQuery {
    /// Dropdown value; `ALL` or a launch site name
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart callback.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterChartQuery {
    /// Dropdown value; `ALL` or a launch site name
    #[serde(default)]
    pub site: Option<String>,
    /// Lower slider handle in kilograms
    #[serde(default)]
    pub min_payload: Option<f64>,
    /// Upper slider handle in kilograms
    #[serde(default)]
    pub max_payload: Option<f64>,
}
