//! FILENAME: app/src/commands/test_plan.rs
// PURPOSE: Test Plan tab commands: upload a template, answer fields, export.
// CONTEXT: Every command returns the freshly generated form rows so the
// frontend never has to patch its own copy.

use std::path::Path;

use persistence::{load_template, save_test_plan_as};
use template_engine::{template_rows, InputStore, Template, TemplateError};

use crate::api_types::{ExportResult, TemplateResult};
use crate::{log_enter, log_error, log_exit, log_info, log_warn, Session};

const NO_TEMPLATE: &str = "No test plan template loaded";

fn rows_of(store: &InputStore) -> TemplateResult {
    TemplateResult::ok(template_rows(store.template(), store.record()))
}

fn install_template(session: &mut Session, template: Template) -> TemplateResult {
    log_info!(
        "TESTPLAN",
        "Template loaded: {} categories, {} fields",
        template.categories().len(),
        template.field_count()
    );
    let store = InputStore::new(template);
    let result = rows_of(&store);
    session.test_plan = Some(store);
    result
}

/// Upload template JSON text. Replaces the current test plan and its answers.
pub fn upload_template(session: &mut Session, text: &str) -> TemplateResult {
    log_enter!("TESTPLAN", "upload_template", "len={}", text.len());

    let result = match Template::parse(text) {
        Ok(template) => install_template(session, template),
        Err(e) => {
            log_error!("TESTPLAN", "Template rejected: {}", e);
            TemplateResult::err(e.to_string())
        }
    };

    log_exit!("TESTPLAN", "upload_template", "success={}", result.success);
    result
}

pub fn upload_template_file(session: &mut Session, path: &Path) -> TemplateResult {
    log_enter!("TESTPLAN", "upload_template_file", "{}", path.display());

    let result = match load_template(path) {
        Ok(template) => install_template(session, template),
        Err(e) => {
            log_error!("TESTPLAN", "Template file rejected: {}", e);
            TemplateResult::err(e.to_string())
        }
    };

    log_exit!("TESTPLAN", "upload_template_file", "success={}", result.success);
    result
}

/// Answer one field.
pub fn set_test_plan_field(
    session: &mut Session,
    category: &str,
    field: &str,
    value: &str,
) -> TemplateResult {
    let store = match session.test_plan.as_mut() {
        Some(store) => store,
        None => return TemplateResult::err(NO_TEMPLATE),
    };

    match store.set_field(category, field, value) {
        Ok(()) => rows_of(store),
        Err(e @ TemplateError::UnknownField { .. }) => {
            log_warn!("TESTPLAN", "{}", e);
            TemplateResult::err(e.to_string())
        }
        Err(e) => {
            log_error!("TESTPLAN", "set_test_plan_field failed: {}", e);
            TemplateResult::err(e.to_string())
        }
    }
}

pub fn get_test_plan_rows(session: &Session) -> TemplateResult {
    match session.test_plan.as_ref() {
        Some(store) => rows_of(store),
        None => TemplateResult::err(NO_TEMPLATE),
    }
}

/// Blank every answer, keeping the template.
pub fn reset_test_plan(session: &mut Session) -> TemplateResult {
    match session.test_plan.as_mut() {
        Some(store) => {
            store.reset();
            log_info!("TESTPLAN", "Answers reset");
            rows_of(store)
        }
        None => TemplateResult::err(NO_TEMPLATE),
    }
}

/// Serialize the answers for download. Nothing is written to disk.
pub fn export_test_plan(session: &Session) -> ExportResult {
    let file_name = session.config.export_file_name.as_str();
    let store = match session.test_plan.as_ref() {
        Some(store) => store,
        None => return ExportResult::err(file_name, NO_TEMPLATE),
    };

    match store.export() {
        Ok(content) => ExportResult {
            success: true,
            file_name: file_name.to_string(),
            content: Some(content),
            path: None,
            error: None,
        },
        Err(e) => {
            log_error!("TESTPLAN", "Export failed: {}", e);
            ExportResult::err(file_name, e.to_string())
        }
    }
}

/// Write the answers into `dir`, replacing any earlier export there.
pub fn export_test_plan_to(session: &Session, dir: &Path) -> ExportResult {
    log_enter!("TESTPLAN", "export_test_plan_to", "{}", dir.display());

    let file_name = session.config.export_file_name.as_str();
    let result = match session.test_plan.as_ref() {
        None => ExportResult::err(file_name, NO_TEMPLATE),
        Some(store) => match (save_test_plan_as(dir, file_name, store.record()), store.export()) {
            (Ok(path), Ok(content)) => ExportResult {
                success: true,
                file_name: file_name.to_string(),
                content: Some(content),
                path: Some(path.display().to_string()),
                error: None,
            },
            (Err(e), _) => {
                log_error!("TESTPLAN", "Export failed: {}", e);
                ExportResult::err(file_name, e.to_string())
            }
            (_, Err(e)) => {
                log_error!("TESTPLAN", "Export failed: {}", e);
                ExportResult::err(file_name, e.to_string())
            }
        },
    };

    log_exit!("TESTPLAN", "export_test_plan_to", "success={}", result.success);
    result
}
