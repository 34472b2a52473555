//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardSettings;
use crate::data::LaunchTable;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Launch records loaded at start-up
    pub table: Arc<LaunchTable>,
    /// Title and slider bounds for the page layout
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    /// Create a new application state around a loaded table.
    pub fn new(table: LaunchTable, settings: DashboardSettings) -> Self {
        Self {
            table: Arc::new(table),
            settings: Arc::new(settings),
        }
    }
}
