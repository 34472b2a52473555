//! Launch records and the selections the dashboard controls produce.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{DataError, DataResult};

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Mission outcome as recorded in the `class` column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchOutcome {
    Failure,
    Success,
}

impl LaunchOutcome {
    /// Map a `class` value to an outcome. Only 0 and 1 are valid.
    pub fn from_class(value: i64) -> Option<Self> {
        match value {
            0 => Some(LaunchOutcome::Failure),
            1 => Some(LaunchOutcome::Success),
            _ => None,
        }
    }

    pub fn class(&self) -> i64 {
        match self {
            LaunchOutcome::Failure => 0,
            LaunchOutcome::Success => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LaunchOutcome::Failure => "Failure",
            LaunchOutcome::Success => "Success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success)
    }
}

/// A single historical launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass: qtty::Kilograms,
    pub outcome: LaunchOutcome,
    pub booster_category: String,
}

/// Launch site dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name),
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        // A cleared dropdown sends an empty value
        if trimmed.is_empty() || trimmed == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(trimmed.to_string())
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}

/// Inclusive payload mass window selected on the range slider, in whole kilograms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRange {
    min: i64,
    max: i64,
}

impl PayloadRange {
    pub fn new(min: i64, max: i64) -> DataResult<Self> {
        if min > max {
            return Err(DataError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build a range from fractional bounds, truncating toward zero.
    pub fn from_bounds(min: f64, max: f64) -> DataResult<Self> {
        Self::new(min.trunc() as i64, max.trunc() as i64)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, mass: qtty::Kilograms) -> bool {
        let value = mass.value();
        value >= self.min as f64 && value <= self.max as f64
    }

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &PayloadRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(LaunchOutcome::from_class(0), Some(LaunchOutcome::Failure));
        assert_eq!(LaunchOutcome::from_class(1), Some(LaunchOutcome::Success));
        assert_eq!(LaunchOutcome::from_class(2), None);
        assert_eq!(LaunchOutcome::Success.class(), 1);
        assert!(!LaunchOutcome::Failure.is_success());
    }

    #[test]
    fn test_site_selection_parsing() {
        assert_eq!(SiteSelection::from("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::from(""), SiteSelection::All);
        assert_eq!(
            SiteSelection::from(" CCAFS LC-40 "),
            SiteSelection::Site("CCAFS LC-40".to_string())
        );
        assert_eq!(SiteSelection::from("KSC LC-39A").site(), Some("KSC LC-39A"));
        assert_eq!(SiteSelection::All.site(), None);
    }

    #[test]
    fn test_site_selection_serde() {
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, "\"ALL\"");

        let parsed: SiteSelection = serde_json::from_str("\"VAFB SLC-4E\"").unwrap();
        assert_eq!(parsed, SiteSelection::Site("VAFB SLC-4E".to_string()));
    }

    #[test]
    fn test_payload_range_rejects_inverted_bounds() {
        let err = PayloadRange::new(5000, 1000).unwrap_err();
        assert!(matches!(err, DataError::InvalidRange { min: 5000, max: 1000 }));
    }

    #[test]
    fn test_payload_range_truncates_and_is_inclusive() {
        let range = PayloadRange::from_bounds(999.9, 5000.7).unwrap();
        assert_eq!(range.min(), 999);
        assert_eq!(range.max(), 5000);
        assert!(range.contains(qtty::Kilograms::new(999.0)));
        assert!(range.contains(qtty::Kilograms::new(5000.0)));
        assert!(!range.contains(qtty::Kilograms::new(5000.5)));
    }

    #[test]
    fn test_payload_range_covers() {
        let outer = PayloadRange::new(0, 10000).unwrap();
        let inner = PayloadRange::new(2000, 4000).unwrap();
        assert!(outer.covers(&inner));
        assert!(!inner.covers(&outer));
    }
}
