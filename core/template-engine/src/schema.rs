//! FILENAME: core/template-engine/src/schema.rs
//! PURPOSE: Derive the blank input record from a template.
//! CONTEXT: The input record mirrors the template's two-level key structure
//! exactly. Only leaf values change after extraction.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::definition::Template;

// ============================================================================
// INPUT RECORD
// ============================================================================

/// One category of user answers: field name -> value, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCategory {
    pub name: String,
    values: Vec<(String, String)>,
}

impl InputCategory {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut String> {
        self.values
            .iter_mut()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }
}

/// The user-editable working copy of a template: one string per leaf.
///
/// There is no public way to add or remove keys; the shape is fixed at
/// extraction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    categories: Vec<InputCategory>,
}

impl InputRecord {
    pub fn categories(&self) -> &[InputCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&InputCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn get(&self, category: &str, field: &str) -> Option<&str> {
        self.category(category).and_then(|c| c.get(field))
    }

    /// All (category, field) pairs in order.
    pub fn keys(&self) -> Vec<(&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.values.iter().map(move |(f, _)| (c.name.as_str(), f.as_str())))
            .collect()
    }

    pub(crate) fn slot_mut(&mut self, category: &str, field: &str) -> Option<&mut String> {
        self.categories
            .iter_mut()
            .find(|c| c.name == category)
            .and_then(|c| c.slot_mut(field))
    }

    pub(crate) fn clear_values(&mut self) {
        for category in &mut self.categories {
            for (_, value) in &mut category.values {
                value.clear();
            }
        }
    }
}

struct CategoryValues<'a>(&'a [(String, String)]);

impl Serialize for CategoryValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in self.0 {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// Serializes as a nested JSON object in template order.
impl Serialize for InputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &CategoryValues(&category.values))?;
        }
        map.end()
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Build a blank input record with the template's exact key structure.
pub fn extract_input_record(template: &Template) -> InputRecord {
    let categories = template
        .categories()
        .iter()
        .map(|category| InputCategory {
            name: category.name.clone(),
            values: category
                .fields
                .iter()
                .map(|field| (field.name.clone(), String::new()))
                .collect(),
        })
        .collect();

    InputRecord { categories }
}
