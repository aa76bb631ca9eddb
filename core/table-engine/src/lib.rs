//! FILENAME: core/table-engine/src/lib.rs
//! Test result log table subsystem.
//!
//! Turns newline-delimited JSON log entries into an immutable row store and
//! derives every view from it by full recomputation: no stage mutates the
//! store, and no stage caches results between events.
//!
//! Layers:
//! - `record`: LogRecord, RowStore and column derivation (what the data IS)
//! - `ingest`: NDJSON text -> RowStore
//! - `filter` / `sort` / `query`: Stage functions (HOW we derive views)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `table`: Per-upload interactive state tying the stages together

pub mod error;
pub mod filter;
pub mod ingest;
pub mod query;
pub mod record;
pub mod sort;
pub mod table;
pub mod view;

pub use error::TableError;
pub use filter::{apply_filter, unique_values, FilterSet, ALL_SENTINEL};
pub use ingest::{
    normalize, normalize_line, IngestMode, IngestOptions, Ingested, LineDiagnostic,
    DATE_FIELD, TIMESTAMP_FIELD, TIME_FIELD,
};
pub use query::{
    query_expected, query_not_expected, query_where, run_query, QueryKind, QueryResult,
    BUSINESS_RULE_COLUMN, JURISDICTION_COLUMN,
};
pub use record::{Columns, LogRecord, RowStore};
pub use sort::{apply_sort, sort_rows, SortDirection, SortSpec};
pub use table::{LogTable, ViewOptions};
pub use view::{ColumnHeader, QueryView, TableView, NO_DATA_MESSAGE};
