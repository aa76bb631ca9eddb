//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for Test Bench integration tests.

#![allow(dead_code)]

use app_lib::{create_session, create_session_with, Session, SessionConfig};

/// Test harness owning one session.
pub struct TestHarness {
    pub session: Session,
}

impl TestHarness {
    /// Create a new test harness with an empty session.
    pub fn new() -> Self {
        TestHarness {
            session: create_session(),
        }
    }

    pub fn with_config(config: SessionConfig) -> Self {
        TestHarness {
            session: create_session_with(config),
        }
    }

    /// Create a harness with the login template already uploaded.
    pub fn with_login_template() -> Self {
        let mut harness = Self::new();
        let result = app_lib::upload_template(&mut harness.session, LoginFixture::TEMPLATE);
        assert!(result.success, "fixture template rejected: {:?}", result.error);
        harness
    }

    /// Create a harness with the business rule log already uploaded.
    pub fn with_rule_log() -> Self {
        let mut harness = Self::new();
        let result = app_lib::upload_logs(&mut harness.session, &RuleLogFixture::ndjson());
        assert!(result.success, "fixture log rejected: {:?}", result.error);
        harness
    }

    /// Cell values of one column in the current table view.
    pub fn column_values(&self, column: &str) -> Vec<String> {
        let result = app_lib::get_log_view(&self.session);
        let view = result.view.expect("no table view");
        let index = view
            .columns
            .iter()
            .position(|c| c.name == column)
            .unwrap_or_else(|| panic!("column {} not in view", column));
        view.rows.iter().map(|row| row[index].clone()).collect()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub struct LoginFixture;

impl LoginFixture {
    pub const TEMPLATE: &'static str =
        r#"{"login":{"username":[],"role":["admin","user"]},"network":{"proxy":["on","off"],"notes":[]}}"#;
}

/// Business rule firings. Record 3 has no jurisdiction.
pub struct RuleLogFixture;

impl RuleLogFixture {
    pub fn lines() -> Vec<&'static str> {
        vec![
            r#"{"timestamp":"2024-09-30 14:05:11","businessRule":"2","jurisdiction":"FL","status":"fired"}"#,
            r#"{"timestamp":"2024-09-30 09:12:40","businessRule":"2","jurisdiction":"TX","status":"fired"}"#,
            r#"{"timestamp":"2024-09-29 18:00:00","businessRule":"2","status":"fired"}"#,
            r#"{"timestamp":"2024-10-01 08:30:00","businessRule":"1","jurisdiction":"FL","status":"skipped"}"#,
        ]
    }

    pub fn ndjson() -> String {
        Self::lines().join("\n")
    }
}
