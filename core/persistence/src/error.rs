//! FILENAME: core/persistence/src/error.rs

use table_engine::TableError;
use template_engine::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Log error: {0}")]
    Log(#[from] TableError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}
