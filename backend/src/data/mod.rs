//! Launch record loading.
//!
//! The CSV is parsed once into a polars [`DataFrame`](polars::prelude::DataFrame)
//! which is then shared read-only by every chart query.

pub mod checksum;
pub mod error;
pub mod loader;

pub use checksum::calculate_checksum;
pub use error::{DataError, DataResult};
pub use loader::{
    LaunchTable, BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS, REQUIRED_COLUMNS,
};
