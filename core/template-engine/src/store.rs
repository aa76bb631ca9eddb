//! FILENAME: core/template-engine/src/store.rs
//! PURPOSE: Holds the template and the user's answers for one upload.
//! CONTEXT: `set_field` is the only mutation. It is not an upsert: the
//! (category, field) pair must exist in the template, because form rows are
//! generated from the template and a write elsewhere would never be seen.

use crate::definition::Template;
use crate::error::TemplateError;
use crate::export;
use crate::schema::{extract_input_record, InputRecord};

#[derive(Debug, Clone)]
pub struct InputStore {
    template: Template,
    record: InputRecord,
}

impl InputStore {
    /// Create a store with every leaf blank.
    pub fn new(template: Template) -> Self {
        let record = extract_input_record(&template);
        InputStore { template, record }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn record(&self) -> &InputRecord {
        &self.record
    }

    pub fn get_field(&self, category: &str, field: &str) -> Option<&str> {
        self.record.get(category, field)
    }

    /// Replace one leaf. Sibling fields in the same category are untouched.
    pub fn set_field(
        &mut self,
        category: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), TemplateError> {
        if !self.template.contains(category, field) {
            log::warn!("Rejected write to unknown field {}.{}", category, field);
            return Err(TemplateError::unknown_field(category, field));
        }

        let slot = self
            .record
            .slot_mut(category, field)
            .ok_or_else(|| TemplateError::unknown_field(category, field))?;
        *slot = value.into();

        log::debug!("Set {}.{} = {:?}", category, field, slot);
        Ok(())
    }

    /// Blank every answer, keeping the template.
    pub fn reset(&mut self) {
        self.record.clear_values();
    }

    /// Pretty-printed JSON of the current answers.
    pub fn export(&self) -> Result<String, TemplateError> {
        export::serialize(&self.record)
    }
}
