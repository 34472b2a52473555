use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use super::format::format_payload_bound;
use crate::data::{DataResult, LaunchTable, BOOSTER_CATEGORY, CLASS, LAUNCH_SITE, PAYLOAD_MASS};
use crate::models::{PayloadRange, SiteSelection};
use crate::routes::figure::{Axis, Figure, Legend, Marker, ScatterTrace, Title, Trace};
use crate::routes::GET_SCATTER_CHART;

const SUCCESS_RATE: &str = "success_rate";

/// Marker symbols assigned to distinct success-rate values, in order.
const SYMBOL_SEQUENCE: [&str; 8] = [
    "circle",
    "diamond",
    "square",
    "x",
    "cross",
    "pentagon",
    "hexagram",
    "star",
];

/// Success rate of one booster category within a filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterSuccessRate {
    pub booster_category: String,
    /// Percentage of successful launches, rounded to one decimal.
    pub success_rate: f64,
}

/// Round to one decimal place.
fn round_rate(rate: f64) -> f64 {
    (rate * 10.0).round() / 10.0
}

/// Launches inside `range`, restricted to the selected site if any.
pub fn filter_launches(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> DataResult<DataFrame> {
    let mut predicate = col(PAYLOAD_MASS)
        .gt_eq(lit(range.min() as f64))
        .and(col(PAYLOAD_MASS).lt_eq(lit(range.max() as f64)));
    if let Some(site) = selection.site() {
        predicate = predicate.and(col(LAUNCH_SITE).eq(lit(site)));
    }

    Ok(table.lazy().filter(predicate).collect()?)
}

/// Mean outcome per booster category × 100, in first-appearance order.
pub fn compute_booster_success_rates(launches: &DataFrame) -> DataResult<Vec<BoosterSuccessRate>> {
    let grouped = launches
        .clone()
        .lazy()
        .group_by_stable([col(BOOSTER_CATEGORY)])
        .agg([col(CLASS).cast(DataType::Float64).mean().alias(SUCCESS_RATE)])
        .collect()?;

    let boosters = grouped.column(BOOSTER_CATEGORY)?.str()?;
    let rates = grouped.column(SUCCESS_RATE)?.f64()?;

    Ok(boosters
        .into_iter()
        .zip(rates)
        .filter_map(|(booster, rate)| {
            Some(BoosterSuccessRate {
                booster_category: booster?.to_string(),
                success_rate: round_rate(rate? * 100.0),
            })
        })
        .collect())
}

/// Chart title naming the selection and the payload window.
pub fn scatter_title(selection: &SiteSelection, range: PayloadRange) -> String {
    let scope = match selection {
        SiteSelection::All => "All sites".to_string(),
        SiteSelection::Site(site) => format!("Site {}", site),
    };
    format!(
        "{} - payload mass between {}kg and {}kg",
        scope,
        format_payload_bound(range.min()),
        format_payload_bound(range.max())
    )
}

/// Scatter of payload mass against outcome, one trace per booster category.
///
/// Each trace is labelled with its category's success rate within the
/// selection, and categories sharing a rate share a marker symbol.
pub fn get_scatter_chart(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> DataResult<Figure> {
    debug!(
        "{} params: {} [{}, {}]",
        GET_SCATTER_CHART,
        selection,
        range.min(),
        range.max()
    );
    table.check_selection(selection)?;

    let launches = filter_launches(table, selection, range)?;
    let rates = compute_booster_success_rates(&launches)?;

    let mut symbols: HashMap<String, &'static str> = HashMap::new();
    for rate in &rates {
        let key = format!("{:.1}", rate.success_rate);
        let next = SYMBOL_SEQUENCE[symbols.len() % SYMBOL_SEQUENCE.len()];
        symbols.entry(key).or_insert(next);
    }

    let mut traces: Vec<ScatterTrace> = rates
        .iter()
        .map(|rate| {
            let label = format!("{:.1}", rate.success_rate);
            ScatterTrace {
                name: format!("{}, {}", rate.booster_category, label),
                mode: "markers".to_string(),
                legendgroup: rate.booster_category.clone(),
                x: Vec::new(),
                y: Vec::new(),
                text: Vec::new(),
                marker: Marker {
                    symbol: symbols.get(&label).copied().unwrap_or("circle").to_string(),
                },
            }
        })
        .collect();

    let index: HashMap<&str, usize> = rates
        .iter()
        .enumerate()
        .map(|(i, rate)| (rate.booster_category.as_str(), i))
        .collect();

    let sites = launches.column(LAUNCH_SITE)?.str()?;
    let payloads = launches.column(PAYLOAD_MASS)?.f64()?;
    let classes = launches.column(CLASS)?.i64()?;
    let boosters = launches.column(BOOSTER_CATEGORY)?.str()?;

    for row in 0..launches.height() {
        let (Some(site), Some(payload), Some(class), Some(booster)) = (
            sites.get(row),
            payloads.get(row),
            classes.get(row),
            boosters.get(row),
        ) else {
            continue;
        };
        if let Some(&i) = index.get(booster) {
            let trace = &mut traces[i];
            trace.x.push(payload);
            trace.y.push(class);
            trace.text.push(site.to_string());
        }
    }

    debug!(
        "{} produced {} points in {} traces",
        GET_SCATTER_CHART,
        launches.height(),
        traces.len()
    );

    let mut figure = Figure::new(scatter_title(selection, range));
    figure.data = traces.into_iter().map(Trace::Scatter).collect();
    figure.layout.xaxis = Some(Axis {
        title: Title::new(PAYLOAD_MASS),
    });
    figure.layout.yaxis = Some(Axis {
        title: Title::new(CLASS),
    });
    figure.layout.legend = Some(Legend {
        title: Title::new("Booster Version, Success rate"),
    });

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    fn table() -> LaunchTable {
        let df = df!(
            LAUNCH_SITE => ["CCAFS LC-40", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS LC-40", "KSC LC-39A"],
            PAYLOAD_MASS => [0.0, 525.0, 500.0, 2490.0, 3170.0, 5300.0],
            CLASS => [0i64, 1, 0, 1, 0, 1],
            BOOSTER_CATEGORY => ["v1.0", "v1.0", "v1.1", "FT", "FT", "FT"],
        )
        .unwrap();
        LaunchTable::from_dataframe(df, String::new()).unwrap()
    }

    fn full_range() -> PayloadRange {
        PayloadRange::new(0, 10000).unwrap()
    }

    #[test]
    fn test_round_rate() {
        assert_eq!(round_rate(66.666), 66.7);
        assert_eq!(round_rate(50.0), 50.0);
        assert_eq!(round_rate(33.333), 33.3);
    }

    #[test]
    fn test_booster_success_rates() {
        let launches = filter_launches(&table(), &SiteSelection::All, full_range()).unwrap();
        let rates = compute_booster_success_rates(&launches).unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates[0].booster_category, "v1.0");
        assert_eq!(rates[0].success_rate, 50.0);
        assert_eq!(rates[1].success_rate, 0.0);
        assert_eq!(rates[2].booster_category, "FT");
        assert_eq!(rates[2].success_rate, 66.7);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = PayloadRange::new(500, 2490).unwrap();
        let launches = filter_launches(&table(), &SiteSelection::All, range).unwrap();
        assert_eq!(launches.height(), 3);
    }

    #[test]
    fn test_scatter_title() {
        let range = PayloadRange::new(0, 10000).unwrap();
        assert_eq!(
            scatter_title(&SiteSelection::All, range),
            "All sites - payload mass between        0kg and   10,000kg"
        );
        assert_eq!(
            scatter_title(&SiteSelection::from("KSC LC-39A"), range),
            "Site KSC LC-39A - payload mass between        0kg and   10,000kg"
        );
    }

    #[test]
    fn test_scatter_traces_per_booster() {
        let figure = get_scatter_chart(&table(), &SiteSelection::All, full_range()).unwrap();
        let traces: Vec<&ScatterTrace> = figure.scatter_traces().collect();

        assert_eq!(figure.point_count(), 6);
        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0].name, "v1.0, 50.0");
        assert_eq!(traces[2].name, "FT, 66.7");
        assert_eq!(traces[2].x, vec![2490.0, 3170.0, 5300.0]);
        assert_eq!(traces[2].y, vec![1, 0, 1]);
        assert_eq!(traces[0].marker.symbol, "circle");
        assert_eq!(traces[1].marker.symbol, "diamond");
        assert_eq!(
            figure.layout.legend.as_ref().unwrap().title.text,
            "Booster Version, Success rate"
        );
    }

    #[test]
    fn test_site_filter_restricts_points() {
        let figure =
            get_scatter_chart(&table(), &SiteSelection::from("CCAFS LC-40"), full_range()).unwrap();

        assert_eq!(figure.point_count(), 3);
        assert!(figure
            .scatter_traces()
            .flat_map(|t| t.text.iter())
            .all(|site| site == "CCAFS LC-40"));
    }

    #[test]
    fn test_empty_selection_has_no_traces() {
        let range = PayloadRange::new(6000, 7000).unwrap();
        let figure = get_scatter_chart(&table(), &SiteSelection::All, range).unwrap();
        assert!(figure.data.is_empty());
        assert_eq!(figure.point_count(), 0);
    }

    #[test]
    fn test_unknown_site() {
        let err = get_scatter_chart(&table(), &SiteSelection::from("Boca Chica"), full_range())
            .unwrap_err();
        assert!(matches!(err, DataError::UnknownSite(_)));
    }
}
