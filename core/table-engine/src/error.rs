//! FILENAME: core/table-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// `line` is 1-based and counts blank lines.
    #[error("Malformed line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}
