//! FILENAME: core/template-engine/src/lib.rs
//! Test plan template subsystem.
//!
//! A template describes, per category and field, either a closed list of
//! allowed values or a free-text slot. The user fills in one value per
//! field and exports the answers as JSON.
//!
//! Layers:
//! - `definition`: The uploaded template (what a test plan expects)
//! - `schema`: Template -> blank input record
//! - `store`: The user-editable working copy
//! - `export`: Input record -> pretty-printed JSON
//! - `view`: Form rows for the frontend

pub mod definition;
pub mod error;
pub mod export;
pub mod schema;
pub mod store;
pub mod view;

pub use definition::{FieldKind, Template, TemplateCategory, TemplateField};
pub use error::TemplateError;
pub use export::{serialize, EXPORT_FILE_NAME};
pub use schema::{extract_input_record, InputCategory, InputRecord};
pub use store::InputStore;
pub use view::{template_rows, FieldInput, TemplateRow, SELECT_PLACEHOLDER, TEXT_PLACEHOLDER};

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_TEMPLATE: &str = r#"{"login":{"username":[],"role":["admin","user"]}}"#;

    #[test]
    fn end_to_end_template_to_export() {
        let template = Template::parse(LOGIN_TEMPLATE).unwrap();
        let mut store = InputStore::new(template);

        assert_eq!(store.get_field("login", "username"), Some(""));
        assert_eq!(store.get_field("login", "role"), Some(""));

        store.set_field("login", "role", "admin").unwrap();

        let exported = store.export().unwrap();
        let expected = "{\n  \"login\": {\n    \"username\": \"\",\n    \"role\": \"admin\"\n  }\n}";
        assert_eq!(exported, expected);
    }

    #[test]
    fn export_matches_rows_shown_to_user() {
        let template = Template::parse(
            r#"{"summaryPage":{"first":["a","b"],"street":[]},"backend":{"sad":[]}}"#,
        )
        .unwrap();
        let mut store = InputStore::new(template);
        store.set_field("backend", "sad", "yes").unwrap();

        let rows = template_rows(store.template(), store.record());
        let from_rows: Vec<(String, String, String)> = rows
            .into_iter()
            .map(|r| (r.category, r.field, r.value))
            .collect();
        assert_eq!(
            from_rows,
            vec![
                ("summaryPage".to_string(), "first".to_string(), String::new()),
                ("summaryPage".to_string(), "street".to_string(), String::new()),
                ("backend".to_string(), "sad".to_string(), "yes".to_string()),
            ]
        );
    }
}
