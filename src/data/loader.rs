//! CSV Data Loader Module
//! Loads a Strava activity export and materializes the typed activity table.

use crate::data::record::{ActivityRecord, ActivityTable};
use chrono::NaiveDateTime;
use polars::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

/// Source date format, e.g. "Jan 5, 2023, 07:30:00 AM".
pub const DATE_FORMAT: &str = "%b %d, %Y, %I:%M:%S %p";

const COL_DATE: &str = "Activity Date";
const COL_SPORT: &str = "Activity Type";
const COL_ELAPSED: &str = "Elapsed Time.1";
const COL_MOVING: &str = "Moving Time";
const COL_DISTANCE: &str = "Distance.1";
const COL_ELEVATION: &str = "Elevation Gain";
const COL_HEART_RATE: &str = "Average Heart Rate";
const COL_GEAR: &str = "Activity Gear";

/// The export columns the loader consumes; everything else is discarded.
/// The ".1" names are the raw-unit (seconds/meters) series of the export's
/// duplicated column pairs.
const REQUIRED_COLUMNS: [&str; 8] = [
    COL_DATE,
    COL_SPORT,
    COL_ELAPSED,
    COL_MOVING,
    COL_DISTANCE,
    COL_ELEVATION,
    COL_HEART_RATE,
    COL_GEAR,
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("row {row}: date '{value}' does not match the export date format")]
    BadDate { row: usize, value: String },
    #[error("row {row}: column '{column}' has no value")]
    MissingValue { row: usize, column: &'static str },
}

/// Load a Strava CSV export into a typed, date-sorted [`ActivityTable`].
///
/// Elevation Gain defaults to 0.0 and Activity Gear to "Unknown" where the
/// export left them empty; every other required field must hold a value.
pub fn load_csv(file_path: &str) -> Result<ActivityTable, LoaderError> {
    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for column in REQUIRED_COLUMNS {
        if !names.iter().any(|name| name == column) {
            return Err(LoaderError::MissingColumn(column));
        }
    }

    let date_col = df.column(COL_DATE)?;
    let sport_col = df.column(COL_SPORT)?;
    let gear_col = df.column(COL_GEAR)?;
    let elapsed_col = numeric_column(&df, COL_ELAPSED)?;
    let moving_col = numeric_column(&df, COL_MOVING)?;
    let distance_col = numeric_column(&df, COL_DISTANCE)?;
    let elevation_col = numeric_column(&df, COL_ELEVATION)?;
    let heart_rate_col = numeric_column(&df, COL_HEART_RATE)?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_date = text_at(date_col, i).ok_or(LoaderError::MissingValue {
            row: i,
            column: COL_DATE,
        })?;
        let date = NaiveDateTime::parse_from_str(&raw_date, DATE_FORMAT).map_err(|_| {
            LoaderError::BadDate {
                row: i,
                value: raw_date.clone(),
            }
        })?;

        let sport = text_at(sport_col, i).ok_or(LoaderError::MissingValue {
            row: i,
            column: COL_SPORT,
        })?;
        let elapsed_time = elapsed_col.get(i).ok_or(LoaderError::MissingValue {
            row: i,
            column: COL_ELAPSED,
        })?;
        let moving_time = moving_col.get(i).ok_or(LoaderError::MissingValue {
            row: i,
            column: COL_MOVING,
        })?;
        let distance = distance_col.get(i).ok_or(LoaderError::MissingValue {
            row: i,
            column: COL_DISTANCE,
        })?;

        let elevation = elevation_col.get(i).unwrap_or(0.0);
        let gear = text_at(gear_col, i).unwrap_or_else(|| "Unknown".to_string());
        let average_heart_rate = heart_rate_col.get(i);

        records.push(ActivityRecord::new(
            date,
            sport,
            elapsed_time,
            moving_time,
            distance,
            elevation,
            average_heart_rate,
            gear,
        ));
    }

    let table = ActivityTable::new(records);
    if table.is_empty() {
        warn!("export contains no activity rows");
    }
    info!(rows = table.len(), "activity table loaded");
    Ok(table)
}

/// Cast a column to f64 regardless of the inferred integer/float dtype.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, LoaderError> {
    Ok(df.column(name)?.cast(&DataType::Float64)?.f64()?.clone())
}

fn text_at(col: &Column, i: usize) -> Option<String> {
    let value = col.get(i).ok()?;
    if value.is_null() {
        None
    } else {
        Some(value.to_string().trim_matches('"').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Activity ID,Activity Date,Activity Type,Elapsed Time.1,\
                          Moving Time,Distance.1,Elevation Gain,Average Heart Rate,Activity Gear";

    fn write_csv(header: &str, rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", header).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn load(file: &tempfile::NamedTempFile) -> Result<ActivityTable, LoaderError> {
        load_csv(file.path().to_str().unwrap())
    }

    #[test]
    fn test_load_sorts_and_applies_defaults() {
        let file = write_csv(
            HEADER,
            &[
                r#"1,"Jan 5, 2023, 07:30:00 AM",Run,3700,3600,5000.0,50.0,140.0,Road Shoes"#,
                r#"2,"Jan 2, 2023, 06:15:00 PM",Ride,7300,7200,20000.0,,,"#,
            ],
        );
        let table = load(&file).unwrap();
        assert_eq!(table.len(), 2);

        // Sorted ascending by date: the Ride (Jan 2) comes first.
        let ride = &table.records()[0];
        let run = &table.records()[1];
        assert_eq!(ride.sport, "Ride");
        assert_eq!(run.sport, "Run");
        assert!(ride.date < run.date);

        // Defaults where the export left cells empty.
        assert_eq!(ride.elevation, 0.0);
        assert_eq!(ride.gear, "Unknown");
        assert_eq!(ride.average_heart_rate, None);

        // Populated cells come through as-is.
        assert_eq!(run.elevation, 50.0);
        assert_eq!(run.gear, "Road Shoes");
        assert_eq!(run.average_heart_rate, Some(140.0));
        assert_eq!(run.distance, 5000.0);
        assert_eq!(run.moving_time, 3600.0);
        assert_eq!(run.elapsed_time, 3700.0);

        // Calendar fields match the parsed date.
        assert_eq!(run.year, 2023);
        assert_eq!(run.month, 1);
        assert_eq!(run.week, 1);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let header = "Activity Date,Activity Type,Elapsed Time.1,\
                      Distance.1,Elevation Gain,Average Heart Rate,Activity Gear";
        let file = write_csv(
            header,
            &[r#""Jan 5, 2023, 07:30:00 AM",Run,3700,5000.0,50.0,140.0,Shoes"#],
        );
        match load(&file) {
            Err(LoaderError::MissingColumn(column)) => assert_eq!(column, "Moving Time"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_date_is_fatal() {
        let file = write_csv(
            HEADER,
            &["1,2023-01-05 07:30:00,Run,3700,3600,5000.0,50.0,140.0,Shoes"],
        );
        match load(&file) {
            Err(LoaderError::BadDate { row, value }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "2023-01-05 07:30:00");
            }
            other => panic!("expected BadDate, got {:?}", other),
        }
    }

    #[test]
    fn test_null_in_required_field_is_fatal() {
        let file = write_csv(
            HEADER,
            &[r#"1,"Jan 5, 2023, 07:30:00 AM",Run,3700,,5000.0,50.0,140.0,Shoes"#],
        );
        match load(&file) {
            Err(LoaderError::MissingValue { column, .. }) => assert_eq!(column, "Moving Time"),
            other => panic!("expected MissingValue, got {:?}", other),
        }
    }
}
