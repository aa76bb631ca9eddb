//! FILENAME: core/template-engine/src/export.rs
//! PURPOSE: Serialize the user's answers for download.

use crate::error::TemplateError;
use crate::schema::InputRecord;

/// Fixed name of the exported test plan file.
pub const EXPORT_FILE_NAME: &str = "test-plan-data.json";

/// Pretty-printed JSON (2-space indent) in template key order.
pub fn serialize(record: &InputRecord) -> Result<String, TemplateError> {
    Ok(serde_json::to_string_pretty(record)?)
}
