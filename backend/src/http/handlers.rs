//! HTTP handlers for the dashboard.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the chart computations.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};

use super::dto::{DashboardLayout, Figure, HealthResponse, PieChartQuery, ScatterChartQuery};
use super::error::AppError;
use super::state::AppState;
use crate::models::{PayloadRange, SiteSelection};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Unwrap query parameters, reporting malformed ones as a JSON 400.
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

const INDEX_HTML: &str = include_str!("../../static/index.html");

// =============================================================================
// Page and Health Check
// =============================================================================

/// GET /
///
/// The dashboard page itself.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.table.len(),
        sites: state.table.sites().len(),
        checksum: state.table.checksum().to_string(),
        loaded_at: state.table.loaded_at(),
    }))
}

// =============================================================================
// Layout and Chart Callbacks
// =============================================================================

/// GET /v1/layout
///
/// Dropdown options, slider bounds and component ids for the page.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(services::build_layout(&state.table, &state.settings)))
}

/// GET /v1/charts/success-pie
///
/// Pie chart for the selected site (default `ALL`).
pub async fn get_pie_chart(
    State(state): State<AppState>,
    query: Result<Query<PieChartQuery>, QueryRejection>,
) -> HandlerResult<Figure> {
    let query = query_params(query)?;
    let selection = SiteSelection::from(query.site.unwrap_or_default());
    let table = state.table.clone();

    let figure = tokio::task::spawn_blocking(move || services::get_pie_chart(&table, &selection))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(figure))
}

/// GET /v1/charts/success-payload-scatter
///
/// Scatter chart for the selected site and payload window. Missing bounds
/// fall back to the slider's initial position.
pub async fn get_scatter_chart(
    State(state): State<AppState>,
    query: Result<Query<ScatterChartQuery>, QueryRejection>,
) -> HandlerResult<Figure> {
    let query = query_params(query)?;
    let selection = SiteSelection::from(query.site.unwrap_or_default());
    let [default_min, default_max] = services::initial_payload_window(&state.table);
    let range = PayloadRange::from_bounds(
        query.min_payload.unwrap_or(default_min as f64),
        query.max_payload.unwrap_or(default_max as f64),
    )?;
    let table = state.table.clone();

    let figure = tokio::task::spawn_blocking(move || {
        services::get_scatter_chart(&table, &selection, range)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(figure))
}
