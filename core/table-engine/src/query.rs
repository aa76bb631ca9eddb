//! FILENAME: core/table-engine/src/query.rs
//! PURPOSE: Fixed business-rule queries over the full RowStore.
//! CONTEXT: Queries ignore the interactive filters and sort. Callers must
//! check `QueryResult::empty` before reading rows.

use serde::{Deserialize, Serialize};

use crate::record::{Columns, LogRecord, RowStore};

pub const BUSINESS_RULE_COLUMN: &str = "businessRule";
pub const JURISDICTION_COLUMN: &str = "jurisdiction";

const FCRA_BUSINESS_RULE: &str = "2";
const FLORIDA: &str = "FL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryKind {
    /// FCRA rule fired for a Florida record (expected)
    FcraFlExpected,
    /// FCRA rule fired outside Florida (not expected)
    FcraFlNotExpected,
}

impl QueryKind {
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::FcraFlExpected => "FCRA FL EXPECTED",
            QueryKind::FcraFlNotExpected => "FCRA FL NOT EXPECTED",
        }
    }

    /// A record without `jurisdiction` counts as not Florida.
    pub fn matches(self, record: &LogRecord) -> bool {
        if record.get(BUSINESS_RULE_COLUMN) != Some(FCRA_BUSINESS_RULE) {
            return false;
        }
        let is_florida = record.get(JURISDICTION_COLUMN) == Some(FLORIDA);
        match self {
            QueryKind::FcraFlExpected => is_florida,
            QueryKind::FcraFlNotExpected => !is_florida,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub kind: QueryKind,
    pub empty: bool,
    /// Columns of the first matching record; empty when nothing matched
    pub columns: Columns,
    pub records: Vec<LogRecord>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

/// Run an arbitrary predicate over the store, labelled with `kind`.
pub fn query_where<F>(store: &RowStore, kind: QueryKind, predicate: F) -> QueryResult
where
    F: Fn(&LogRecord) -> bool,
{
    let records: Vec<LogRecord> = store.iter().filter(|r| predicate(r)).cloned().collect();

    log::info!("Query {} matched {} of {} rows", kind.label(), records.len(), store.len());

    QueryResult {
        kind,
        empty: records.is_empty(),
        columns: Columns::from_records(&records),
        records,
    }
}

pub fn run_query(store: &RowStore, kind: QueryKind) -> QueryResult {
    query_where(store, kind, |record| kind.matches(record))
}

/// `businessRule == "2"` and `jurisdiction == "FL"`.
pub fn query_expected(store: &RowStore) -> QueryResult {
    run_query(store, QueryKind::FcraFlExpected)
}

/// `businessRule == "2"` and `jurisdiction != "FL"`.
pub fn query_not_expected(store: &RowStore) -> QueryResult {
    run_query(store, QueryKind::FcraFlNotExpected)
}
