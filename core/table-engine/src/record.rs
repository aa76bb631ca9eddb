//! FILENAME: core/table-engine/src/record.rs
//! PURPOSE: Core data types of the log table.
//! CONTEXT: A LogRecord is one flattened log line (column -> string). Records
//! in one upload may carry different key sets; the display schema comes from
//! the first record only (see `Columns`).

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

// ============================================================================
// LOG RECORD
// ============================================================================

/// One normalized log line. Field order follows the source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecord {
    fields: Vec<(String, String)>,
}

impl LogRecord {
    pub fn new() -> Self {
        LogRecord { fields: Vec::new() }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    /// Set a column. An existing column keeps its position; a new one is appended.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        let pos = self.fields.iter().position(|(name, _)| name == column)?;
        Some(self.fields.remove(pos).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LogRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = LogRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Serializes as a flat JSON object in field order.
impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ============================================================================
// ROW STORE
// ============================================================================

/// Immutable snapshot of one upload. Cloning shares the records.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    records: Arc<[LogRecord]>,
}

impl RowStore {
    pub fn new(records: Vec<LogRecord>) -> Self {
        RowStore {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Columns of record 0.
    pub fn columns(&self) -> Columns {
        Columns::from_records(&self.records)
    }

    /// True if any record carries the column.
    pub fn has_column(&self, column: &str) -> bool {
        self.records.iter().any(|r| r.contains(column))
    }
}

impl From<Vec<LogRecord>> for RowStore {
    fn from(records: Vec<LogRecord>) -> Self {
        RowStore::new(records)
    }
}

// ============================================================================
// COLUMNS
// ============================================================================

/// Ordered column identifiers taken from the first record of a sequence.
///
/// Later records with extra keys lose those columns in the view; records
/// missing a key render a blank cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Columns(Vec<String>);

impl Columns {
    pub fn from_record(record: &LogRecord) -> Self {
        Columns(record.keys().map(str::to_string).collect())
    }

    pub fn from_records(records: &[LogRecord]) -> Self {
        records.first().map(Self::from_record).unwrap_or_default()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cell strings for one record, aligned to these columns.
    pub fn cells(&self, record: &LogRecord) -> Vec<String> {
        self.0
            .iter()
            .map(|c| record.get(c).unwrap_or_default().to_string())
            .collect()
    }
}
