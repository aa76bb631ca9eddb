//! FILENAME: core/persistence/src/log_file.rs

use crate::PersistenceError;
use std::fs;
use std::path::Path;
use table_engine::{normalize, IngestOptions, Ingested};

/// Read and normalize an uploaded result log.
pub fn load_log(path: &Path, options: &IngestOptions) -> Result<Ingested, PersistenceError> {
    let bytes = fs::read(path)?;
    let ingested = parse_log_bytes(&bytes, options)?;
    log::info!(
        "Loaded log {}: {} records",
        path.display(),
        ingested.store.len()
    );
    Ok(ingested)
}

/// Normalize raw upload content. The content must be UTF-8.
pub fn parse_log_bytes(bytes: &[u8], options: &IngestOptions) -> Result<Ingested, PersistenceError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        PersistenceError::InvalidFormat(format!("Log file is not valid UTF-8: {}", e))
    })?;
    Ok(normalize(text, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_engine::TableError;

    #[test]
    fn test_load_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(
            &path,
            "{\"timestamp\":\"2024-09-30 14:05:11\",\"businessRule\":\"2\"}\n{\"businessRule\":\"1\"}\n",
        )
        .unwrap();

        let ingested = load_log(&path, &IngestOptions::default()).unwrap();
        assert_eq!(ingested.store.len(), 2);
        assert_eq!(ingested.store.get(0).unwrap().get("date"), Some("2024-09-30"));
    }

    #[test]
    fn test_malformed_line_aborts() {
        let err = parse_log_bytes(b"{\"a\":1}\n{oops", &IngestOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::Log(TableError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_log_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(
            &path,
            b"\xEF\xBB\xBF{\"businessRule\":\"2\",\"jurisdiction\":\"FL\"}\r\n",
        )
        .unwrap();

        let ingested = load_log(&path, &IngestOptions::default()).unwrap();
        assert_eq!(ingested.store.len(), 1);
        let record = ingested.store.get(0).unwrap();
        assert_eq!(record.get("businessRule"), Some("2"));
        assert_eq!(record.get("jurisdiction"), Some("FL"));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse_log_bytes(&[0xff, 0xfe, b'{'], &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidFormat(_)));
    }
}
