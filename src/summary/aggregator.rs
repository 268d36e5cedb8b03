//! Summary Aggregator Module
//! Groups the activity table into ordered (bucket, value) series for plotting.

use crate::data::{ActivityRecord, ActivityTable, Metric};
use std::collections::BTreeMap;
use tracing::warn;

/// Sentinel meaning "no sport filter applied".
pub const ALL_SPORTS: &str = "All";

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Length of the fixed weekly axis. ISO week 53 exists in some years but
/// stays off the axis.
const WEEKS_PER_YEAR: usize = 52;

/// Time grouping for the summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Yearly,
    Monthly,
    Weekly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Yearly,
        Granularity::Monthly,
        Granularity::Weekly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Yearly => "Yearly",
            Granularity::Monthly => "Monthly",
            Granularity::Weekly => "Weekly",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }

    /// X-axis caption for this grouping.
    pub fn axis_label(self) -> &'static str {
        match self {
            Granularity::Yearly => "Year",
            Granularity::Monthly => "Month",
            Granularity::Weekly => "Week",
        }
    }
}

/// One aggregation group with its summed metric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub value: f64,
}

/// Sum `metric` over the (optionally sport-filtered) table, grouped per
/// `granularity`. `year` scopes the Monthly and Weekly views and is ignored
/// for Yearly.
pub fn aggregate(
    table: &ActivityTable,
    granularity: Granularity,
    sport: &str,
    metric: Metric,
    year: i32,
) -> Vec<Bucket> {
    match granularity {
        Granularity::Yearly => yearly_totals(table, sport, metric),
        Granularity::Monthly => monthly_totals(table, sport, metric, year),
        Granularity::Weekly => weekly_totals(table, sport, metric, year),
    }
}

/// Label-keyed entry point for the dropdown wiring.
///
/// Selection values that don't correspond to derived options can only come
/// from a wiring bug, so they produce an empty series instead of an error.
/// An unknown sport simply matches no rows.
pub fn compute_series(
    table: &ActivityTable,
    summary: &str,
    sport: &str,
    metric: &str,
    year: &str,
) -> Vec<Bucket> {
    let Some(granularity) = Granularity::from_label(summary) else {
        warn!(summary, "unknown summary type selected");
        return Vec::new();
    };
    let Some(metric) = Metric::from_label(metric) else {
        warn!(metric, "unknown metric selected");
        return Vec::new();
    };
    if granularity == Granularity::Yearly {
        // The year dropdown plays no part in a yearly summary.
        return yearly_totals(table, sport, metric);
    }
    let Ok(year) = year.trim().parse::<i32>() else {
        warn!(year, "unparseable year selected");
        return Vec::new();
    };
    aggregate(table, granularity, sport, metric, year)
}

fn matches_sport(record: &ActivityRecord, sport: &str) -> bool {
    sport == ALL_SPORTS || record.sport == sport
}

fn yearly_totals(table: &ActivityTable, sport: &str, metric: Metric) -> Vec<Bucket> {
    let mut sums: BTreeMap<i32, f64> = BTreeMap::new();
    for record in table.records().iter().filter(|r| matches_sport(r, sport)) {
        *sums.entry(record.year).or_insert(0.0) += metric.of(record);
    }

    // No gap-filling here: the yearly axis starts where the data starts.
    sums.into_iter()
        .map(|(year, value)| Bucket {
            label: year.to_string(),
            value,
        })
        .collect()
}

fn monthly_totals(table: &ActivityTable, sport: &str, metric: Metric, year: i32) -> Vec<Bucket> {
    let mut sums = [0.0_f64; 12];
    for record in table
        .records()
        .iter()
        .filter(|r| matches_sport(r, sport) && r.year == year)
    {
        sums[(record.month - 1) as usize] += metric.of(record);
    }

    MONTH_ABBREV
        .iter()
        .zip(sums)
        .map(|(label, value)| Bucket {
            label: (*label).to_string(),
            value,
        })
        .collect()
}

fn weekly_totals(table: &ActivityTable, sport: &str, metric: Metric, year: i32) -> Vec<Bucket> {
    let mut sums = [0.0_f64; WEEKS_PER_YEAR];
    for record in table
        .records()
        .iter()
        .filter(|r| matches_sport(r, sport) && r.year == year)
    {
        // Week 53 falls outside the fixed axis and lands in no bucket.
        let week = record.week as usize;
        if (1..=WEEKS_PER_YEAR).contains(&week) {
            sums[week - 1] += metric.of(record);
        }
    }

    (1..=WEEKS_PER_YEAR)
        .zip(sums)
        .map(|(week, value)| Bucket {
            label: week.to_string(),
            value,
        })
        .collect()
}
