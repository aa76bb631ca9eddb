//! FILENAME: core/table-engine/src/ingest.rs
//! PURPOSE: Record normalizer - NDJSON text to a RowStore.
//! CONTEXT: One JSON object per line. Values are flattened to strings and a
//! `timestamp` of the form "<date> <time>" is split into `date` and `time`.
//! Key sets are not validated across lines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TableError;
use crate::record::{LogRecord, RowStore};

pub const TIMESTAMP_FIELD: &str = "timestamp";
pub const DATE_FIELD: &str = "date";
pub const TIME_FIELD: &str = "time";

/// Windows editors prefix UTF-8 files with U+FEFF; `trim` keeps it.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

// ============================================================================
// OPTIONS
// ============================================================================

/// What to do with a line that is not a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IngestMode {
    /// Abort the whole upload at the first malformed line
    Strict,
    /// Skip malformed lines and report them
    Lenient,
}

impl Default for IngestMode {
    fn default() -> Self {
        IngestMode::Strict
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngestOptions {
    pub mode: IngestMode,
}

impl IngestOptions {
    pub fn lenient() -> Self {
        IngestOptions {
            mode: IngestMode::Lenient,
        }
    }
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// A line skipped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDiagnostic {
    /// 1-based line number in the uploaded text
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub store: RowStore,
    /// Always empty in strict mode
    pub diagnostics: Vec<LineDiagnostic>,
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Parse every non-blank line of `text` into a LogRecord, in input order.
pub fn normalize(text: &str, options: &IngestOptions) -> Result<Ingested, TableError> {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();

    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match normalize_line(line) {
            Ok(record) => records.push(record),
            Err(message) => {
                let line_no = index + 1;
                match options.mode {
                    IngestMode::Strict => {
                        log::warn!("Ingestion aborted at line {}: {}", line_no, message);
                        return Err(TableError::MalformedLine {
                            line: line_no,
                            message,
                        });
                    }
                    IngestMode::Lenient => {
                        log::warn!("Skipping line {}: {}", line_no, message);
                        diagnostics.push(LineDiagnostic {
                            line: line_no,
                            message,
                        });
                    }
                }
            }
        }
    }

    log::info!(
        "Ingested {} records ({} lines skipped)",
        records.len(),
        diagnostics.len()
    );

    Ok(Ingested {
        store: RowStore::new(records),
        diagnostics,
    })
}

/// Normalize a single trimmed line. The error is a human-readable reason.
pub fn normalize_line(line: &str) -> Result<LogRecord, String> {
    let value: Value = serde_json::from_str(line).map_err(|e| e.to_string())?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))
        }
    };

    let mut record = LogRecord::new();
    flatten_into(&mut record, None, map);
    split_timestamp(&mut record);
    Ok(record)
}

/// Nested objects become dotted columns ("request.id").
fn flatten_into(record: &mut LogRecord, prefix: Option<&str>, map: Map<String, Value>) {
    for (key, value) in map {
        let column = match prefix {
            Some(p) => format!("{}.{}", p, key),
            None => key,
        };
        match value {
            Value::Object(nested) => flatten_into(record, Some(&column), nested),
            _ if record.contains(&column) => {
                log::warn!("Duplicate column {} after flattening, keeping the first value", column);
            }
            other => record.insert(column, scalar_text(other)),
        }
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Arrays are kept as compact JSON text
        other => other.to_string(),
    }
}

/// Replace a non-empty `timestamp` with `date` and `time`, split on the first space.
fn split_timestamp(record: &mut LogRecord) {
    let (date, time) = match record.get(TIMESTAMP_FIELD) {
        Some(ts) if !ts.is_empty() => match ts.split_once(' ') {
            Some((date, time)) => (date.to_string(), time.to_string()),
            None => (ts.to_string(), String::new()),
        },
        _ => return,
    };

    record.remove(TIMESTAMP_FIELD);
    record.insert(DATE_FIELD, date);
    record.insert(TIME_FIELD, time);
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(text: &str) -> Result<Ingested, TableError> {
        normalize(text, &IngestOptions::default())
    }

    #[test]
    fn test_records_in_input_order() {
        let text = "{\"id\":\"1\"}\n{\"id\":\"2\"}\n{\"id\":\"3\"}";
        let ingested = strict(text).unwrap();

        assert_eq!(ingested.store.len(), 3);
        let ids: Vec<&str> = ingested.store.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(ingested.diagnostics.is_empty());
    }

    #[test]
    fn test_timestamp_split() {
        let ingested = strict(
            r#"{"timestamp":"2024-09-30 14:05:11","businessRule":"2","jurisdiction":"FL"}"#,
        )
        .unwrap();
        let record = ingested.store.get(0).unwrap();

        assert!(!record.contains("timestamp"));
        assert_eq!(record.get("date"), Some("2024-09-30"));
        assert_eq!(record.get("time"), Some("14:05:11"));

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["businessRule", "jurisdiction", "date", "time"]);
    }

    #[test]
    fn test_timestamp_split_on_first_space_only() {
        let record = normalize_line(r#"{"timestamp":"2024-09-30 14:05:11 UTC"}"#).unwrap();
        assert_eq!(record.get("date"), Some("2024-09-30"));
        assert_eq!(record.get("time"), Some("14:05:11 UTC"));
    }

    #[test]
    fn test_timestamp_without_space() {
        let record = normalize_line(r#"{"timestamp":"2024-09-30"}"#).unwrap();
        assert_eq!(record.get("date"), Some("2024-09-30"));
        assert_eq!(record.get("time"), Some(""));
    }

    #[test]
    fn test_empty_timestamp_is_kept() {
        let record = normalize_line(r#"{"timestamp":"","id":"1"}"#).unwrap();
        assert_eq!(record.get("timestamp"), Some(""));
        assert!(!record.contains("date"));
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_skipped() {
        let text = "  {\"id\":\"1\"}\r\n\n   \n\t{\"id\":\"2\"}  \n";
        let ingested = strict(text).unwrap();
        assert_eq!(ingested.store.len(), 2);
    }

    #[test]
    fn test_scalar_values_become_text() {
        let record =
            normalize_line(r#"{"n":42,"f":1.5,"b":true,"z":null,"list":[1,"a"]}"#).unwrap();
        assert_eq!(record.get("n"), Some("42"));
        assert_eq!(record.get("f"), Some("1.5"));
        assert_eq!(record.get("b"), Some("true"));
        assert_eq!(record.get("z"), Some(""));
        assert_eq!(record.get("list"), Some(r#"[1,"a"]"#));
    }

    #[test]
    fn test_nested_objects_flattened() {
        let record = normalize_line(r#"{"request":{"id":"r1","meta":{"retry":2}},"ok":true}"#).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["request.id", "request.meta.retry", "ok"]);
        assert_eq!(record.get("request.meta.retry"), Some("2"));
    }

    #[test]
    fn test_flattened_key_collision_keeps_first_value() {
        let record = normalize_line(r#"{"a":{"b":"nested"},"a.b":"literal"}"#).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a.b"), Some("nested"));
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let ingested = strict("\u{FEFF}{\"id\":\"1\"}\n{\"id\":\"2\"}").unwrap();
        assert_eq!(ingested.store.len(), 2);
        assert_eq!(ingested.store.get(0).unwrap().get("id"), Some("1"));
    }

    #[test]
    fn test_strict_aborts_with_line_number() {
        let text = "{\"id\":\"1\"}\n\n{not json}\n{\"id\":\"3\"}";
        let err = strict(text).unwrap_err();
        match err {
            TableError::MalformedLine { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_line_is_malformed() {
        let err = strict("[1,2,3]").unwrap_err();
        match err {
            TableError::MalformedLine { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("an array"));
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_skips_and_reports() {
        let text = "{\"id\":\"1\"}\nnope\n{\"id\":\"3\"}\n42";
        let ingested = normalize(text, &IngestOptions::lenient()).unwrap();

        assert_eq!(ingested.store.len(), 2);
        let lines: Vec<usize> = ingested.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_empty_text() {
        let ingested = strict("").unwrap();
        assert!(ingested.store.is_empty());
    }
}
