//! FILENAME: tests/test_test_plan.rs
//! Integration tests for Test Plan commands.

mod common;

use app_lib::{
    export_test_plan, export_test_plan_to, get_test_plan_rows, reset_test_plan,
    set_test_plan_field, upload_template, upload_template_file, SessionConfig,
};
use common::{LoginFixture, TestHarness};
use std::fs;
use template_engine::FieldInput;

// ============================================================================
// UPLOAD TESTS
// ============================================================================

#[test]
fn test_upload_builds_rows_in_template_order() {
    let harness = TestHarness::with_login_template();
    let result = get_test_plan_rows(&harness.session);

    assert!(result.success);
    let keys: Vec<&str> = result.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["login-username", "login-role", "network-proxy", "network-notes"]
    );
    assert!(result.rows.iter().all(|r| r.value.is_empty()));
    assert!(matches!(result.rows[0].input, FieldInput::Text { .. }));
    match &result.rows[1].input {
        FieldInput::Select { options, .. } => assert_eq!(options, &vec!["admin", "user"]),
        other => panic!("expected select, got {:?}", other),
    }
}

#[test]
fn test_rejected_upload_keeps_previous_plan() {
    let mut harness = TestHarness::with_login_template();
    set_test_plan_field(&mut harness.session, "login", "role", "user");

    let result = upload_template(&mut harness.session, r#"{"login":"oops"}"#);
    assert!(!result.success);
    assert!(result.error.unwrap().contains("login"));

    let rows = get_test_plan_rows(&harness.session).rows;
    assert_eq!(rows[1].value, "user");
}

#[test]
fn test_invalid_json_upload() {
    let mut harness = TestHarness::new();
    let result = upload_template(&mut harness.session, "{not json");
    assert!(!result.success);
    assert!(!harness.session.has_test_plan());
}

#[test]
fn test_upload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, LoginFixture::TEMPLATE).unwrap();

    let mut harness = TestHarness::new();
    let result = upload_template_file(&mut harness.session, &path);
    assert!(result.success);
    assert_eq!(result.rows.len(), 4);

    let missing = upload_template_file(&mut harness.session, &dir.path().join("absent.json"));
    assert!(!missing.success);
    assert_eq!(get_test_plan_rows(&harness.session).rows.len(), 4);
}

#[test]
fn test_commands_without_template() {
    let mut harness = TestHarness::new();
    assert!(!get_test_plan_rows(&harness.session).success);
    assert!(!set_test_plan_field(&mut harness.session, "a", "b", "c").success);
    assert!(!export_test_plan(&harness.session).success);
}

// ============================================================================
// EDITING TESTS
// ============================================================================

#[test]
fn test_set_field_updates_only_that_row() {
    let mut harness = TestHarness::with_login_template();
    let result = set_test_plan_field(&mut harness.session, "login", "username", "alice");

    assert!(result.success);
    let values: Vec<&str> = result.rows.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["alice", "", "", ""]);
}

#[test]
fn test_set_unknown_field_is_rejected() {
    let mut harness = TestHarness::with_login_template();
    let result = set_test_plan_field(&mut harness.session, "login", "password", "x");

    assert!(!result.success);
    assert!(result.rows.is_empty());
    let rows = get_test_plan_rows(&harness.session).rows;
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.value.is_empty()));
}

#[test]
fn test_reset_blanks_answers() {
    let mut harness = TestHarness::with_login_template();
    set_test_plan_field(&mut harness.session, "network", "proxy", "on");

    let result = reset_test_plan(&mut harness.session);
    assert!(result.success);
    assert!(result.rows.iter().all(|r| r.value.is_empty()));
}

// ============================================================================
// EXPORT TESTS
// ============================================================================

#[test]
fn test_end_to_end_export() {
    let mut harness = TestHarness::new();
    upload_template(
        &mut harness.session,
        r#"{"login":{"username":[],"role":["admin","user"]}}"#,
    );
    set_test_plan_field(&mut harness.session, "login", "role", "admin");

    let result = export_test_plan(&harness.session);
    assert!(result.success);
    assert_eq!(result.file_name, "test-plan-data.json");
    assert_eq!(
        result.content.unwrap(),
        "{\n  \"login\": {\n    \"username\": \"\",\n    \"role\": \"admin\"\n  }\n}"
    );
}

#[test]
fn test_export_to_directory_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut harness = TestHarness::with_login_template();

    set_test_plan_field(&mut harness.session, "login", "role", "user");
    let first = export_test_plan_to(&harness.session, dir.path());
    assert!(first.success);

    set_test_plan_field(&mut harness.session, "login", "role", "admin");
    let second = export_test_plan_to(&harness.session, dir.path());
    assert!(second.success);
    assert_eq!(first.path, second.path);

    let written = fs::read_to_string(dir.path().join("test-plan-data.json")).unwrap();
    assert_eq!(Some(written), second.content);
    assert!(second.content.unwrap().contains("\"role\": \"admin\""));
}

#[test]
fn test_export_uses_configured_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig {
        export_file_name: "answers.json".to_string(),
        ..Default::default()
    };
    let mut harness = TestHarness::with_config(config);
    upload_template(&mut harness.session, LoginFixture::TEMPLATE);

    let result = export_test_plan_to(&harness.session, dir.path());
    assert!(result.success);
    assert_eq!(result.file_name, "answers.json");
    assert!(dir.path().join("answers.json").exists());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let harness = TestHarness::with_login_template();

    let result = export_test_plan_to(&harness.session, &dir.path().join("missing"));
    assert!(!result.success);
    assert!(result.error.is_some());
}
