//! FILENAME: core/template-engine/src/view.rs
//! Template form view - one renderable row per template field.
//!
//! Enumerations render as a dropdown with a blank placeholder option,
//! free-text fields render as a text box.

use serde::Serialize;

use crate::definition::{FieldKind, Template};
use crate::schema::InputRecord;

pub const SELECT_PLACEHOLDER: &str = "Select an option";
pub const TEXT_PLACEHOLDER: &str = "Enter value";

/// The widget used to answer one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum FieldInput {
    Select { placeholder: String, options: Vec<String> },
    Text { placeholder: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRow {
    /// Stable row key ("category-field")
    pub key: String,
    pub category: String,
    pub field: String,
    pub input: FieldInput,
    /// Current answer ("" until the user picks or types something)
    pub value: String,
}

/// Rows in template order, with the current answers filled in.
pub fn template_rows(template: &Template, record: &InputRecord) -> Vec<TemplateRow> {
    let mut rows = Vec::with_capacity(template.field_count());

    for category in template.categories() {
        for field in &category.fields {
            let input = match &field.kind {
                FieldKind::Enumeration { options } => FieldInput::Select {
                    placeholder: SELECT_PLACEHOLDER.to_string(),
                    options: options.clone(),
                },
                FieldKind::FreeText => FieldInput::Text {
                    placeholder: TEXT_PLACEHOLDER.to_string(),
                },
            };

            rows.push(TemplateRow {
                key: format!("{}-{}", category.name, field.name),
                category: category.name.clone(),
                field: field.name.clone(),
                input,
                value: record
                    .get(&category.name, &field.name)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    rows
}
