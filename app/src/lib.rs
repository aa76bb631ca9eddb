//! FILENAME: app/src/lib.rs
//! Test Bench application layer.
//!
//! Owns the per-user `Session` (the uploaded test plan and the uploaded
//! result log) and exposes one command function per user action. Each
//! command takes the session by `&mut`, recomputes what changed, and returns
//! a serializable result struct for the frontend.

use serde::{Deserialize, Serialize};
use std::path::Path;
use table_engine::{IngestOptions, LogTable, QueryResult, ViewOptions};
use template_engine::{InputStore, EXPORT_FILE_NAME};

pub mod api_types;
pub mod commands;
pub mod logging;

pub use api_types::{ExportResult, FilterOptionsResult, QueryResponse, TableResult, TemplateResult};
pub use commands::*;
pub use logging::{get_log_path, init_log_file, install_logger, sort_log_file};

// ============================================================================
// CONFIGURATION
// ============================================================================

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub ingest: IngestOptions,
    pub view: ViewOptions,
    /// File name used when the test plan answers are written to disk
    pub export_file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            ingest: IngestOptions::default(),
            view: ViewOptions::default(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl SessionConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Everything one user has uploaded. Each field is written only by the
/// upload command for it; a failed upload leaves the previous value in place.
#[derive(Debug, Default)]
pub struct Session {
    pub config: SessionConfig,
    /// Test Plan tab
    pub test_plan: Option<InputStore>,
    /// Business Rules tab
    pub business_rules: Option<LogTable>,
    /// Open query dialog, independent of the table's filters and sort
    pub query: Option<QueryResult>,
}

impl Session {
    pub fn has_test_plan(&self) -> bool {
        self.test_plan.is_some()
    }

    pub fn has_logs(&self) -> bool {
        self.business_rules.is_some()
    }
}

pub fn create_session() -> Session {
    create_session_with(SessionConfig::default())
}

pub fn create_session_with(config: SessionConfig) -> Session {
    log_info!(
        "SYS",
        "Creating Session (ingest={:?}, resort_after_filter={})",
        config.ingest.mode,
        config.view.resort_after_filter
    );
    Session {
        config,
        ..Default::default()
    }
}

/// End a session. If a log file is open its lines are put back in sequence
/// order. Returns the number of lines in the sorted file (0 without a file).
pub fn close_session(session: Session) -> Result<usize, String> {
    log_info!(
        "SYS",
        "Closing Session (test_plan={}, logs={})",
        session.has_test_plan(),
        session.has_logs()
    );
    drop(session);

    if get_log_path().is_none() {
        return Ok(0);
    }
    sort_log_file()
}

/// Install the `log` bridge and optionally open a log file.
pub fn init_logging(log_path: Option<&Path>, level: log::LevelFilter) -> Result<(), String> {
    if let Some(path) = log_path {
        init_log_file(path)?;
    }
    install_logger(level)?;
    log_info!("SYS", "Logging initialized at level {}", level);
    Ok(())
}
