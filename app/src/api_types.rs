//! FILENAME: app/src/api_types.rs
// PURPOSE: Result types returned by the command layer.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use serde::Serialize;
use table_engine::{LineDiagnostic, QueryView, TableView};
use template_engine::TemplateRow;

/// Result of a test plan command: the form rows after the change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResult {
    pub success: bool,
    pub rows: Vec<TemplateRow>,
    pub error: Option<String>,
}

impl TemplateResult {
    pub fn ok(rows: Vec<TemplateRow>) -> Self {
        TemplateResult {
            success: true,
            rows,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        TemplateResult {
            success: false,
            rows: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Result of an export. `content` is the exact JSON text that was (or would be) written.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    pub file_name: String,
    pub content: Option<String>,
    /// Set when the export was written to disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub error: Option<String>,
}

impl ExportResult {
    pub fn err(file_name: &str, message: impl Into<String>) -> Self {
        ExportResult {
            success: false,
            file_name: file_name.to_string(),
            content: None,
            path: None,
            error: Some(message.into()),
        }
    }
}

/// Result of a log table command: the whole recomputed view.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    pub success: bool,
    pub view: Option<TableView>,
    /// "No data available." when the view has no rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lines skipped during a lenient upload
    pub diagnostics: Vec<LineDiagnostic>,
    pub error: Option<String>,
}

impl TableResult {
    pub fn err(message: impl Into<String>) -> Self {
        TableResult {
            success: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Dropdown entries for one column: "All" then each distinct value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResult {
    pub success: bool,
    pub column: String,
    pub options: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub success: bool,
    pub view: Option<QueryView>,
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn err(message: impl Into<String>) -> Self {
        QueryResponse {
            success: false,
            view: None,
            error: Some(message.into()),
        }
    }
}
