//! Activity Record Module
//! Fixed-schema representation of one exercise session and the loaded table.

use chrono::{Datelike, NaiveDateTime};
use std::collections::BTreeSet;

/// One recorded exercise session.
///
/// Durations are in seconds, distance and elevation in meters. The calendar
/// fields are always derived from `date` by [`ActivityRecord::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub date: NaiveDateTime,
    pub sport: String,
    pub elapsed_time: f64,
    pub moving_time: f64,
    pub distance: f64,
    pub elevation: f64,
    pub average_heart_rate: Option<f64>,
    pub gear: String,
    pub year: i32,
    pub month: u32,
    /// ISO week number (1-53); can belong to the neighboring ISO year.
    pub week: u32,
}

impl ActivityRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDateTime,
        sport: String,
        elapsed_time: f64,
        moving_time: f64,
        distance: f64,
        elevation: f64,
        average_heart_rate: Option<f64>,
        gear: String,
    ) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            week: date.iso_week().week(),
            date,
            sport,
            elapsed_time,
            moving_time,
            distance,
            elevation,
            average_heart_rate,
            gear,
        }
    }
}

/// The loaded activity table: date-sorted and read-only after construction.
#[derive(Debug, Clone)]
pub struct ActivityTable {
    records: Vec<ActivityRecord>,
}

impl ActivityTable {
    pub fn new(mut records: Vec<ActivityRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sports, sorted lexicographically (case-sensitive).
    pub fn sports(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.sport.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        set.into_iter().collect()
    }

    /// First and last activity date.
    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

/// The metrics a chart can be drawn for. Average heart rate is loaded into
/// the table but is not a selectable metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Distance,
    MovingTime,
    ElapsedTime,
    Elevation,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Distance,
        Metric::MovingTime,
        Metric::ElapsedTime,
        Metric::Elevation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Distance => "Distance",
            Metric::MovingTime => "Moving Time",
            Metric::ElapsedTime => "Elapsed Time",
            Metric::Elevation => "Elevation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    /// The record field this metric sums over.
    pub fn of(self, record: &ActivityRecord) -> f64 {
        match self {
            Metric::Distance => record.distance,
            Metric::MovingTime => record.moving_time,
            Metric::ElapsedTime => record.elapsed_time,
            Metric::Elevation => record.elevation,
        }
    }

    /// Whether values are durations in seconds (drawn with an h:mm:ss axis).
    pub fn is_duration(self) -> bool {
        matches!(self, Metric::MovingTime | Metric::ElapsedTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, sport: &str) -> ActivityRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        ActivityRecord::new(
            date,
            sport.to_string(),
            3600.0,
            3000.0,
            10_000.0,
            120.0,
            Some(140.0),
            "Unknown".to_string(),
        )
    }

    #[test]
    fn test_calendar_fields_derived_from_date() {
        let r = record("2023-01-05", "Run");
        assert_eq!(r.year, 2023);
        assert_eq!(r.month, 1);
        assert_eq!(r.week, 1);

        // Dec 31, 2018 is a Monday in ISO week 1 of 2019; the calendar year
        // stays 2018.
        let r = record("2018-12-31", "Run");
        assert_eq!(r.year, 2018);
        assert_eq!(r.month, 12);
        assert_eq!(r.week, 1);

        // Dec 31, 2020 falls in ISO week 53.
        let r = record("2020-12-31", "Ride");
        assert_eq!(r.week, 53);
    }

    #[test]
    fn test_table_sorts_by_date() {
        let table = ActivityTable::new(vec![
            record("2023-02-10", "Run"),
            record("2023-01-05", "Run"),
            record("2023-01-20", "Ride"),
        ]);
        let dates: Vec<_> = table.records().iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_distinct_sports_and_years() {
        let table = ActivityTable::new(vec![
            record("2022-06-01", "Run"),
            record("2023-01-05", "Hike"),
            record("2023-02-10", "Run"),
        ]);
        assert_eq!(table.sports(), vec!["Hike".to_string(), "Run".to_string()]);
        assert_eq!(table.years(), vec![2022, 2023]);
    }

    #[test]
    fn test_metric_labels_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_label(metric.label()), Some(metric));
        }
        assert_eq!(Metric::from_label("Average Heart Rate"), None);
    }

    #[test]
    fn test_metric_field_access() {
        let r = record("2023-01-05", "Run");
        assert_eq!(Metric::Distance.of(&r), 10_000.0);
        assert_eq!(Metric::MovingTime.of(&r), 3000.0);
        assert_eq!(Metric::ElapsedTime.of(&r), 3600.0);
        assert_eq!(Metric::Elevation.of(&r), 120.0);
    }
}
