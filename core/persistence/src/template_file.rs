//! FILENAME: core/persistence/src/template_file.rs

use crate::PersistenceError;
use std::fs;
use std::path::{Path, PathBuf};
use template_engine::{serialize, InputRecord, Template, EXPORT_FILE_NAME};

pub fn load_template(path: &Path) -> Result<Template, PersistenceError> {
    let text = fs::read_to_string(path)?;
    let template = Template::parse(&text)?;
    log::info!(
        "Loaded template {}: {} fields",
        path.display(),
        template.field_count()
    );
    Ok(template)
}

/// Where the export lands inside `dir`.
pub fn export_path(dir: &Path) -> PathBuf {
    dir.join(EXPORT_FILE_NAME)
}

/// Write the answers to `dir/test-plan-data.json`, replacing any previous export.
pub fn save_test_plan(dir: &Path, record: &InputRecord) -> Result<PathBuf, PersistenceError> {
    save_test_plan_as(dir, EXPORT_FILE_NAME, record)
}

pub fn save_test_plan_as(
    dir: &Path,
    file_name: &str,
    record: &InputRecord,
) -> Result<PathBuf, PersistenceError> {
    if !dir.is_dir() {
        return Err(PersistenceError::InvalidFormat(format!(
            "Export target is not a directory: {}",
            dir.display()
        )));
    }
    if file_name.is_empty() || file_name.contains(['/', '\\']) {
        return Err(PersistenceError::InvalidFormat(format!(
            "Invalid export file name: {:?}",
            file_name
        )));
    }

    let text = serialize(record)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;

    log::info!("Exported test plan to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_engine::InputStore;

    #[test]
    fn test_load_and_save_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("plan.json");
        fs::write(&template_path, r#"{"login":{"username":[],"role":["admin","user"]}}"#).unwrap();

        let template = load_template(&template_path).unwrap();
        let mut store = InputStore::new(template);
        store.set_field("login", "role", "admin").unwrap();

        let written = save_test_plan(dir.path(), store.record()).unwrap();
        assert_eq!(written.file_name().unwrap(), EXPORT_FILE_NAME);

        let text = fs::read_to_string(&written).unwrap();
        assert_eq!(
            text,
            "{\n  \"login\": {\n    \"username\": \"\",\n    \"role\": \"admin\"\n  }\n}"
        );
    }

    #[test]
    fn test_template_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, b"\xEF\xBB\xBF{\"login\":{\"role\":[\"admin\"]}}").unwrap();

        let template = load_template(&path).unwrap();
        assert_eq!(
            template.field("login", "role").unwrap().kind.options(),
            &["admin".to_string()]
        );
    }

    #[test]
    fn test_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }

    #[test]
    fn test_malformed_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"login":"not an object"}"#).unwrap();

        let err = load_template(&path).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::Template(template_engine::TemplateError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::parse(r#"{"a":{"b":[]}}"#).unwrap();
        let store = InputStore::new(template);

        let err = save_test_plan(&dir.path().join("nope"), store.record()).unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidFormat(_)));
    }

    #[test]
    fn test_save_with_custom_name() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::parse(r#"{"a":{"b":["x"]}}"#).unwrap();
        let store = InputStore::new(template);

        let written = save_test_plan_as(dir.path(), "answers.json", store.record()).unwrap();
        assert_eq!(written, dir.path().join("answers.json"));
        assert!(written.exists());

        let err = save_test_plan_as(dir.path(), "../escape.json", store.record()).unwrap_err();
        assert!(matches!(err, PersistenceError::InvalidFormat(_)));
    }
}
