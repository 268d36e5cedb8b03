//! Dropdown Options Module
//! Derives the four dropdown parameter sets from the loaded table.

use crate::data::{ActivityTable, Metric};
use crate::summary::{Granularity, ALL_SPORTS};

/// One selectable dropdown entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Choices plus the initially selected value for one dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownParams {
    pub choices: Vec<Choice>,
    pub default: String,
}

/// Parameters for all four dashboard dropdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub summary: DropdownParams,
    pub sport: DropdownParams,
    pub metric: DropdownParams,
    pub year: DropdownParams,
}

impl DashboardOptions {
    /// Pure derivation from the table's distinct values; the summary and
    /// metric lists are fixed.
    pub fn derive(table: &ActivityTable) -> Self {
        let summary = DropdownParams {
            choices: Granularity::ALL.iter().map(|g| Choice::new(g.label())).collect(),
            default: Granularity::Yearly.label().to_string(),
        };

        let mut sport_choices = vec![Choice::new(ALL_SPORTS)];
        sport_choices.extend(table.sports().into_iter().map(Choice::new));
        let sport = DropdownParams {
            choices: sport_choices,
            default: ALL_SPORTS.to_string(),
        };

        // Average heart rate is loaded with the table but stays out of the
        // metric menu.
        let metric = DropdownParams {
            choices: Metric::ALL.iter().map(|m| Choice::new(m.label())).collect(),
            default: Metric::Distance.label().to_string(),
        };

        let years = table.years();
        let year = DropdownParams {
            choices: years.iter().map(|y| Choice::new(y.to_string())).collect(),
            default: years.last().map(|y| y.to_string()).unwrap_or_default(),
        };

        Self {
            summary,
            sport,
            metric,
            year,
        }
    }
}
