//! FILENAME: core/persistence/src/lib.rs
//! Test Bench Persistence Module
//!
//! Handles the two file interfaces: test plan templates (JSON in, answers
//! exported as `test-plan-data.json`) and test result logs (NDJSON in).
//! Logs are never written back.

mod error;
mod log_file;
mod template_file;

pub use error::PersistenceError;
pub use log_file::{load_log, parse_log_bytes};
pub use template_file::{export_path, load_template, save_test_plan, save_test_plan_as};
