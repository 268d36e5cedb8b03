//! Summary module - grouped aggregation, dropdown options, unit helpers

mod aggregator;
mod options;
mod units;

pub use aggregator::{aggregate, compute_series, Bucket, Granularity, ALL_SPORTS};
pub use options::{Choice, DashboardOptions, DropdownParams};
pub use units::{compute_pace, s_to_hms};
