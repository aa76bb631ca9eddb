//! FILENAME: core/table-engine/src/table.rs
//! PURPOSE: Interactive state for one uploaded log file.
//! CONTEXT: Every event recomputes the visible rows from scratch. A filter
//! change starts again from the store in store order; the active sort is
//! kept in the `SortSpec` (the header still shows its arrow) but is not re-applied
//! unless `ViewOptions::resort_after_filter` is set.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::filter::{apply_filter, unique_values, FilterSet};
use crate::query::{run_query, QueryKind, QueryResult};
use crate::record::{LogRecord, RowStore};
use crate::sort::{apply_sort, sort_rows, SortSpec};
use crate::view::TableView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewOptions {
    /// Re-apply the active sort after every filter change
    pub resort_after_filter: bool,
}

#[derive(Debug, Clone)]
pub struct LogTable {
    store: RowStore,
    filters: FilterSet,
    sort: SortSpec,
    visible: Vec<LogRecord>,
    options: ViewOptions,
}

impl LogTable {
    pub fn new(store: RowStore, options: ViewOptions) -> Self {
        let visible = store.records().to_vec();
        LogTable {
            store,
            filters: FilterSet::new(),
            sort: SortSpec::default(),
            visible,
            options,
        }
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Rows currently on screen.
    pub fn visible(&self) -> &[LogRecord] {
        &self.visible
    }

    /// Handle a filter dropdown change. `"All"` clears the column.
    pub fn set_filter(&mut self, column: &str, value: &str) -> Result<&[LogRecord], TableError> {
        self.check_column(column)?;
        self.filters.set(column, value);
        self.refilter();
        Ok(&self.visible)
    }

    pub fn clear_filters(&mut self) -> &[LogRecord] {
        self.filters.clear_all();
        self.refilter();
        &self.visible
    }

    /// Handle a header click: sorts the rows currently on screen.
    pub fn sort_by(&mut self, column: &str) -> Result<&[LogRecord], TableError> {
        self.check_column(column)?;
        let (sorted, spec) = apply_sort(&self.visible, column, &self.sort);
        self.visible = sorted;
        self.sort = spec;
        Ok(&self.visible)
    }

    pub fn unique_values(&self, column: &str) -> Vec<String> {
        unique_values(&self.store, column)
    }

    /// Dropdown entries for a column no record carries are an error, as for
    /// `set_filter` and `sort_by`.
    pub fn filter_options(&self, column: &str) -> Result<Vec<String>, TableError> {
        self.check_column(column)?;
        Ok(self.unique_values(column))
    }

    pub fn query(&self, kind: QueryKind) -> QueryResult {
        run_query(&self.store, kind)
    }

    pub fn view(&self) -> TableView {
        TableView::build(&self.store, &self.visible, &self.sort)
    }

    fn refilter(&mut self) {
        let filtered = apply_filter(&self.store, &self.filters);
        self.visible = if self.options.resort_after_filter {
            sort_rows(&filtered, &self.sort)
        } else {
            filtered
        };
    }

    fn check_column(&self, column: &str) -> Result<(), TableError> {
        if self.store.has_column(column) {
            Ok(())
        } else {
            Err(TableError::UnknownColumn(column.to_string()))
        }
    }
}
