//! FILENAME: core/template-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed template at {path}: {reason}")]
    MalformedTemplate { path: String, reason: String },

    #[error("Unknown field: {category}.{field}")]
    UnknownField { category: String, field: String },
}

impl TemplateError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TemplateError::MalformedTemplate {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_field(category: &str, field: &str) -> Self {
        TemplateError::UnknownField {
            category: category.to_string(),
            field: field.to_string(),
        }
    }
}
