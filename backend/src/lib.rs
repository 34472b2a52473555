//! # Launch Records Dashboard
//!
//! Interactive dashboard over a static CSV of historical rocket launches.
//!
//! The CSV is loaded once into a polars DataFrame. A single web page offers a
//! launch-site dropdown and a payload-mass range slider; every change of
//! either control asks the backend to recompute a success pie chart and a
//! payload/outcome scatter chart, returned as Plotly figure JSON.
//!
//! ## Architecture
//!
//! - [`data`]: CSV loading, validation and the immutable [`data::LaunchTable`]
//! - [`models`]: launch records and control selections
//! - [`services`]: layout, pie and scatter computations
//! - [`routes`]: figure and layout DTO types
//! - [`api`]: re-exports of the public DTOs
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum router, handlers and error mapping

pub mod api;
pub mod config;
pub mod data;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
