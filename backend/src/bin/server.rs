//! Launch Dashboard HTTP Server Binary
//!
//! Loads the launch CSV, sets up the HTTP router and starts serving the
//! dashboard page.
//!
//! # Usage
//!
//! ```bash
//! LAUNCH_DATA_PATH=data/spacex_launch_dash.csv \
//!   cargo run --bin launch-dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `DASHBOARD_CONFIG`: Path of a `dashboard.toml` (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `LAUNCH_DATA_PATH`: Launch CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launch_dashboard::config::DashboardConfig;
use launch_dashboard::data::LaunchTable;
use launch_dashboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;

    let table = LaunchTable::from_csv(&config.data.path).with_context(|| {
        format!(
            "Failed to load launch records from {}",
            config.data.path.display()
        )
    })?;
    info!(
        "Loaded {} launches from {} sites",
        table.len(),
        table.sites().len()
    );

    let state = AppState::new(table, config.dashboard.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
