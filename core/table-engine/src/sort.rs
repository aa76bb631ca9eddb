//! FILENAME: core/table-engine/src/sort.rs
//! PURPOSE: Click-to-sort on a single column.
//! CONTEXT: Clicking the sorted column again flips ascending to descending;
//! clicking any other column (or a descending one) starts ascending.
//! Values compare as plain strings, so "10" sorts before "9".

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::record::LogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

impl SortDirection {
    /// Header arrow shown next to the sorted column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The active sort column (if any) and its direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        SortSpec {
            column: Some(column.into()),
            direction,
        }
    }

    /// The sort that results from clicking `column`.
    pub fn next(&self, column: &str) -> SortSpec {
        let direction = match (&self.column, self.direction) {
            (Some(current), SortDirection::Ascending) if current == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        SortSpec::new(column, direction)
    }

    /// Direction if `column` is the sorted one.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match &self.column {
            Some(current) if current == column => Some(self.direction),
            _ => None,
        }
    }
}

/// Sort `rows` for a click on `column`, returning the new rows and spec.
pub fn apply_sort(rows: &[LogRecord], column: &str, previous: &SortSpec) -> (Vec<LogRecord>, SortSpec) {
    let spec = previous.next(column);
    let sorted = sort_rows(rows, &spec);
    log::debug!(
        "Sorted {} rows by {} {:?}",
        sorted.len(),
        column,
        spec.direction
    );
    (sorted, spec)
}

/// Stable sort by the active column; ties keep their input order.
/// A missing value sorts as "".
pub fn sort_rows(rows: &[LogRecord], spec: &SortSpec) -> Vec<LogRecord> {
    let mut sorted = rows.to_vec();
    if let Some(column) = spec.column.as_deref() {
        sorted.sort_by(|a, b| {
            let ordering = compare_values(a.get(column), b.get(column));
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}

fn compare_values(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default().cmp(b.unwrap_or_default())
}
