//! FILENAME: core/table-engine/src/filter.rs
//! PURPOSE: Per-column equality filters and filter dropdown values.
//! CONTEXT: Filtering always starts from the full RowStore, so applying the
//! same FilterSet twice yields the same rows.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::record::{LogRecord, RowStore};

/// Dropdown entry that clears a column's filter.
pub const ALL_SENTINEL: &str = "All";

// ============================================================================
// FILTER SET
// ============================================================================

/// Column -> accepted value. A missing entry or "" accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Set the accepted value for a column. `"All"` clears it.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let value = if value == ALL_SENTINEL { String::new() } else { value };
        self.entries.insert(column.into(), value);
    }

    pub fn clear(&mut self, column: &str) {
        self.entries.remove(column);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Active value for a column, if any.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Entries that actually restrict rows.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// A record missing a filtered column never matches.
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.active()
            .all(|(column, value)| record.get(column) == Some(value))
    }
}

// ============================================================================
// STAGE FUNCTIONS
// ============================================================================

/// Rows of the store accepted by every active filter, in store order.
pub fn apply_filter(store: &RowStore, filters: &FilterSet) -> Vec<LogRecord> {
    let rows: Vec<LogRecord> = store
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect();

    log::debug!("Filter kept {} of {} rows", rows.len(), store.len());
    rows
}

/// `["All", v1, v2, ...]` over the unfiltered store, first-occurrence order.
/// A record without the column contributes "".
pub fn unique_values(store: &RowStore, column: &str) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut values = vec![ALL_SENTINEL.to_string()];

    for record in store.iter() {
        let value = record.get(column).unwrap_or_default();
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }

    values
}
