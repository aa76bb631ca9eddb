//! FILENAME: core/table-engine/src/view.rs
//! Table View - The renderable output for the frontend.
//!
//! The view is a flat grid of strings: one header per column (with its sort
//! arrow and filter dropdown values) and one row of cells per visible record.
//! The frontend only needs to iterate and draw.

use serde::Serialize;

use crate::filter::unique_values;
use crate::query::QueryResult;
use crate::record::{Columns, LogRecord, RowStore};
use crate::sort::{SortDirection, SortSpec};

/// Shown in place of the table when no rows are visible.
pub const NO_DATA_MESSAGE: &str = "No data available.";

// ============================================================================
// LOG TABLE VIEW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub name: String,
    /// Name plus sort arrow, e.g. "date ↑"
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortDirection>,
    /// Dropdown entries, starting with "All"
    pub filter_options: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    /// Cells aligned to `columns`; a missing value is ""
    pub rows: Vec<Vec<String>>,
    /// Rows in the whole upload
    pub total_rows: usize,
}

impl TableView {
    /// Columns are taken from the first visible record. Dropdown values come
    /// from the whole store so a filter can always be widened again.
    pub fn build(store: &RowStore, visible: &[LogRecord], sort: &SortSpec) -> Self {
        let columns = Columns::from_records(visible);

        let headers = columns
            .iter()
            .map(|name| {
                let sort = sort.direction_for(name);
                let label = match sort {
                    Some(direction) => format!("{} {}", name, direction.indicator()),
                    None => name.clone(),
                };
                ColumnHeader {
                    name: name.clone(),
                    label,
                    sort,
                    filter_options: unique_values(store, name),
                }
            })
            .collect();

        let rows = visible.iter().map(|record| columns.cells(record)).collect();

        TableView {
            columns: headers,
            rows,
            total_rows: store.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

// ============================================================================
// QUERY VIEW
// ============================================================================

/// What the query dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum QueryView {
    NoResults {
        title: String,
    },
    Results {
        title: String,
        count: usize,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl QueryView {
    pub fn from_result(result: &QueryResult) -> Self {
        let title = result.kind.label().to_string();
        if result.empty {
            return QueryView::NoResults { title };
        }

        QueryView::Results {
            title,
            count: result.len(),
            columns: result.columns.names().to_vec(),
            rows: result
                .records
                .iter()
                .map(|record| result.columns.cells(record))
                .collect(),
        }
    }
}
