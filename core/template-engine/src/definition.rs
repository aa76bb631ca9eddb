//! FILENAME: core/template-engine/src/definition.rs
//! Template Definition - what a test plan expects as input.
//!
//! The uploaded file is a two-level JSON object:
//! category -> field -> list of allowed values (empty list = free text).
//! These structures are read-only once loaded and keep the key order of
//! the uploaded file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TemplateError;

// ============================================================================
// FIELD KIND
// ============================================================================

/// How a single template field is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FieldKind {
    /// Pick one of the listed values
    Enumeration { options: Vec<String> },
    /// Type any value
    FreeText,
}

impl FieldKind {
    /// Allowed values; empty for free text.
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Enumeration { options } => options,
            FieldKind::FreeText => &[],
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self, FieldKind::FreeText)
    }
}

// ============================================================================
// TEMPLATE STRUCTURE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    pub name: String,
    pub kind: FieldKind,
}

/// A top-level template key and its fields, in upload order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCategory {
    pub name: String,
    pub fields: Vec<TemplateField>,
}

impl TemplateCategory {
    pub fn field(&self, name: &str) -> Option<&TemplateField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A parsed test plan template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    categories: Vec<TemplateCategory>,
}

impl Template {
    /// Parse template text. Invalid JSON and shape violations are both errors.
    /// A leading UTF-8 byte order mark is ignored.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Build a template from an already-parsed JSON value.
    pub fn from_json(value: &Value) -> Result<Self, TemplateError> {
        let root = value.as_object().ok_or_else(|| {
            TemplateError::malformed(
                "(root)",
                format!("expected an object, found {}", json_type_name(value)),
            )
        })?;

        let mut categories = Vec::with_capacity(root.len());
        for (category, fields) in root {
            let fields = fields.as_object().ok_or_else(|| {
                TemplateError::malformed(
                    category.as_str(),
                    format!("expected an object of fields, found {}", json_type_name(fields)),
                )
            })?;
            categories.push(parse_category(category, fields)?);
        }

        log::debug!(
            "Parsed template: {} categories, {} fields",
            categories.len(),
            categories.iter().map(|c| c.fields.len()).sum::<usize>()
        );

        Ok(Template { categories })
    }

    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&TemplateCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn field(&self, category: &str, field: &str) -> Option<&TemplateField> {
        self.category(category).and_then(|c| c.field(field))
    }

    /// True if the (category, field) pair exists in this template.
    pub fn contains(&self, category: &str, field: &str) -> bool {
        self.field(category, field).is_some()
    }

    /// Total number of leaf fields across all categories.
    pub fn field_count(&self) -> usize {
        self.categories.iter().map(|c| c.fields.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ============================================================================
// PARSING HELPERS
// ============================================================================

fn parse_category(name: &str, fields: &Map<String, Value>) -> Result<TemplateCategory, TemplateError> {
    let mut parsed = Vec::with_capacity(fields.len());
    for (field, value) in fields {
        parsed.push(TemplateField {
            name: field.clone(),
            kind: parse_field_kind(name, field, value)?,
        });
    }
    Ok(TemplateCategory {
        name: name.to_string(),
        fields: parsed,
    })
}

/// A non-empty list is an enumeration; an empty list or a bare primitive is
/// a free-text slot. Anything nested deeper than two levels is rejected.
fn parse_field_kind(category: &str, field: &str, value: &Value) -> Result<FieldKind, TemplateError> {
    match value {
        Value::Array(items) => {
            let mut options = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let option = primitive_text(item).ok_or_else(|| {
                    TemplateError::malformed(
                        format!("{}.{}[{}]", category, field, i),
                        format!("options must be primitive values, found {}", json_type_name(item)),
                    )
                })?;
                options.push(option);
            }
            if options.is_empty() {
                Ok(FieldKind::FreeText)
            } else {
                Ok(FieldKind::Enumeration { options })
            }
        }
        Value::Object(_) => Err(TemplateError::malformed(
            format!("{}.{}", category, field),
            "templates deeper than two levels are not supported",
        )),
        _ => Ok(FieldKind::FreeText),
    }
}

fn primitive_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
