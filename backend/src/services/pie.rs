use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{DataResult, LaunchTable, CLASS, LAUNCH_SITE};
use crate::models::{LaunchOutcome, SiteSelection};
use crate::routes::figure::{Figure, PieTrace, Trace};
use crate::routes::GET_PIE_CHART;

const SUCCESSES: &str = "successes";
const LAUNCHES: &str = "launches";

/// Success count for one launch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSuccessCount {
    pub launch_site: String,
    pub successes: i64,
}

/// Outcome tally for a single launch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub failures: i64,
    pub successes: i64,
}

impl OutcomeCounts {
    pub fn total(&self) -> i64 {
        self.failures + self.successes
    }
}

/// Sum of successful launches per site, in first-appearance order.
pub fn compute_site_success_counts(table: &LaunchTable) -> DataResult<Vec<SiteSuccessCount>> {
    let grouped = table
        .lazy()
        .group_by_stable([col(LAUNCH_SITE)])
        .agg([col(CLASS).sum().alias(SUCCESSES)])
        .collect()?;

    let sites = grouped.column(LAUNCH_SITE)?.str()?;
    let successes = grouped.column(SUCCESSES)?.i64()?;

    Ok(sites
        .into_iter()
        .zip(successes)
        .filter_map(|(site, count)| {
            Some(SiteSuccessCount {
                launch_site: site?.to_string(),
                successes: count.unwrap_or(0),
            })
        })
        .collect())
}

/// Failure and success counts for the launches at `site`.
pub fn compute_outcome_counts(table: &LaunchTable, site: &str) -> DataResult<OutcomeCounts> {
    let totals = table
        .lazy()
        .filter(col(LAUNCH_SITE).eq(lit(site)))
        .select([
            col(CLASS).sum().alias(SUCCESSES),
            col(CLASS).count().cast(DataType::Int64).alias(LAUNCHES),
        ])
        .collect()?;

    let successes = totals.column(SUCCESSES)?.i64()?.get(0).unwrap_or(0);
    let launches = totals.column(LAUNCHES)?.i64()?.get(0).unwrap_or(0);

    Ok(OutcomeCounts {
        failures: launches - successes,
        successes,
    })
}

/// Pie chart for the site dropdown.
///
/// All sites: one slice per site sized by its success count. A single site:
/// a failure slice and a success slice.
pub fn get_pie_chart(table: &LaunchTable, selection: &SiteSelection) -> DataResult<Figure> {
    debug!("{} params: {}", GET_PIE_CHART, selection);
    table.check_selection(selection)?;

    let figure = match selection {
        SiteSelection::All => {
            let counts = compute_site_success_counts(table)?;
            let mut figure = Figure::new("Total Success Launches By Site");
            figure.data.push(Trace::Pie(PieTrace {
                labels: counts.iter().map(|c| c.launch_site.clone()).collect(),
                values: counts.iter().map(|c| c.successes).collect(),
                sort: false,
            }));
            figure
        }
        SiteSelection::Site(site) => {
            let counts = compute_outcome_counts(table, site)?;
            let mut figure = Figure::new(format!("Total Success Launches for site {}", site));
            figure.data.push(Trace::Pie(PieTrace {
                labels: vec![
                    LaunchOutcome::Failure.label().to_string(),
                    LaunchOutcome::Success.label().to_string(),
                ],
                values: vec![counts.failures, counts.successes],
                sort: false,
            }));
            figure
        }
    };

    Ok(figure)
}
