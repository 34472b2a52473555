use chrono::{DateTime, Utc};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

use super::checksum::calculate_checksum;
use super::error::{DataError, DataResult};
use crate::models::{LaunchOutcome, LaunchRecord, SiteSelection};

pub const LAUNCH_SITE: &str = "Launch Site";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const CLASS: &str = "class";
pub const BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns the dashboard reads; anything else in the CSV is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY];

/// Immutable in-memory table of launch records.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    frame: DataFrame,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
    checksum: String,
    loaded_at: DateTime<Utc>,
}

impl LaunchTable {
    /// Load and validate a launch CSV file.
    pub fn from_csv(path: &Path) -> DataResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let checksum = calculate_checksum(&bytes);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;

        info!(
            "Parsed {} rows from {} (sha256 {})",
            df.height(),
            path.display(),
            &checksum[..12]
        );

        Self::from_dataframe(df, checksum)
    }

    /// Build a table from an already parsed frame.
    ///
    /// The frame is projected onto [`REQUIRED_COLUMNS`] and every cell is
    /// parsed from its text form, so a malformed `class` or payload fails the
    /// load instead of being cast to null. Rows with missing values are then
    /// dropped.
    pub fn from_dataframe(df: DataFrame, checksum: String) -> DataResult<Self> {
        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !column_names.iter().any(|name| name == required) {
                return Err(DataError::MissingColumn(required.to_string()));
            }
        }

        let raw_height = df.height();
        let payloads = text_column(&df, PAYLOAD_MASS)?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| parse_payload(row, raw))
            .collect::<DataResult<Vec<Option<f64>>>>()?;
        let classes = text_column(&df, CLASS)?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| parse_class(row, raw))
            .collect::<DataResult<Vec<Option<i64>>>>()?;

        let sites = text_column(&df, LAUNCH_SITE)?;
        let boosters = text_column(&df, BOOSTER_CATEGORY)?;

        let frame = df!(
            LAUNCH_SITE => sites,
            PAYLOAD_MASS => payloads,
            CLASS => classes,
            BOOSTER_CATEGORY => boosters,
        )?
        .lazy()
        .drop_nulls(None)
        .collect()?;

        let dropped = raw_height - frame.height();
        if dropped > 0 {
            warn!("Dropped {} launch rows with missing values", dropped);
        }
        if frame.height() == 0 {
            return Err(DataError::EmptyDataset);
        }

        let mut sites: Vec<String> = Vec::new();
        for site in frame.column(LAUNCH_SITE)?.str()?.into_iter().flatten() {
            if !sites.iter().any(|s| s == site) {
                sites.push(site.to_string());
            }
        }

        let payloads = frame.column(PAYLOAD_MASS)?.f64()?;
        let payload_min = payloads.min().ok_or(DataError::EmptyDataset)?;
        let payload_max = payloads.max().ok_or(DataError::EmptyDataset)?;

        debug!(
            "Launch table ready: {} records, {} sites, payload {}..{} kg",
            frame.height(),
            sites.len(),
            payload_min,
            payload_max
        );

        Ok(Self {
            frame,
            sites,
            payload_min,
            payload_max,
            checksum,
            loaded_at: Utc::now(),
        })
    }

    /// Lazy view over the cleaned records for chart queries.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Reject selections naming a site that is not in the dataset.
    pub fn check_selection(&self, selection: &SiteSelection) -> DataResult<()> {
        match selection.site() {
            Some(site) if !self.has_site(site) => Err(DataError::UnknownSite(site.to_string())),
            _ => Ok(()),
        }
    }

    pub fn payload_min(&self) -> qtty::Kilograms {
        qtty::Kilograms::new(self.payload_min)
    }

    pub fn payload_max(&self) -> qtty::Kilograms {
        qtty::Kilograms::new(self.payload_max)
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Materialize every row as a typed record.
    pub fn records(&self) -> DataResult<Vec<LaunchRecord>> {
        let sites = self.frame.column(LAUNCH_SITE)?.str()?;
        let payloads = self.frame.column(PAYLOAD_MASS)?.f64()?;
        let classes = self.frame.column(CLASS)?.i64()?;
        let boosters = self.frame.column(BOOSTER_CATEGORY)?.str()?;

        let mut records = Vec::with_capacity(self.frame.height());
        for row in 0..self.frame.height() {
            let (Some(site), Some(payload), Some(class), Some(booster)) = (
                sites.get(row),
                payloads.get(row),
                classes.get(row),
                boosters.get(row),
            ) else {
                continue;
            };
            let outcome =
                LaunchOutcome::from_class(class).ok_or_else(|| DataError::InvalidOutcome {
                    row,
                    value: class.to_string(),
                })?;

            records.push(LaunchRecord {
                launch_site: site.to_string(),
                payload_mass: qtty::Kilograms::new(payload),
                outcome,
                booster_category: booster.to_string(),
            });
        }
        Ok(records)
    }
}

/// Cells of `name` as text, whatever type the CSV reader inferred.
fn text_column(df: &DataFrame, name: &str) -> DataResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|cell| cell.map(str::to_string))
        .collect())
}

fn parse_payload(row: usize, raw: Option<String>) -> DataResult<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(DataError::InvalidValue {
            column: PAYLOAD_MASS.to_string(),
            row,
            value: raw,
        }),
    }
}

/// Accepts `0`/`1` and their float spellings (`1.0`); anything else fails.
fn parse_class(row: usize, raw: Option<String>) -> DataResult<Option<i64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let class = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.fract() == 0.0)
        .map(|value| value as i64)
        .and_then(LaunchOutcome::from_class);
    match class {
        Some(outcome) => Ok(Some(outcome.class())),
        None => Err(DataError::InvalidOutcome { row, value: raw }),
    }
}
