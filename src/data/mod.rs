//! Data module - activity export loading and the typed activity table

mod loader;
mod record;

pub use loader::{load_csv, LoaderError};
pub use record::{ActivityRecord, ActivityTable, Metric};
