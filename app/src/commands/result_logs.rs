//! FILENAME: app/src/commands/result_logs.rs
// PURPOSE: Business Rules tab commands: upload a result log, filter, sort, query.
// CONTEXT: A new upload replaces the table wholesale and discards filters,
// sort and any open query. A failed upload keeps the previous table.

use std::path::Path;

use persistence::load_log;
use table_engine::{
    normalize, Ingested, LineDiagnostic, LogTable, QueryKind, QueryView, TableView,
    NO_DATA_MESSAGE,
};

use crate::api_types::{FilterOptionsResult, QueryResponse, TableResult};
use crate::{log_debug, log_enter, log_error, log_exit, log_info, log_warn, Session};

const NO_LOGS: &str = "No result log loaded";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn view_result(view: TableView, diagnostics: Vec<LineDiagnostic>) -> TableResult {
    let message = if view.is_empty() {
        Some(NO_DATA_MESSAGE.to_string())
    } else {
        None
    };
    TableResult {
        success: true,
        view: Some(view),
        message,
        diagnostics,
        error: None,
    }
}

fn install_log(session: &mut Session, ingested: Ingested) -> TableResult {
    let Ingested { store, diagnostics } = ingested;

    for diagnostic in &diagnostics {
        log_warn!(
            "LOGS",
            "Skipped line {}: {}",
            diagnostic.line,
            diagnostic.message
        );
    }
    log_info!(
        "LOGS",
        "Result log loaded: {} records, {} columns, {} skipped",
        store.len(),
        store.columns().len(),
        diagnostics.len()
    );

    let table = LogTable::new(store, session.config.view);
    let view = table.view();
    session.business_rules = Some(table);
    session.query = None;
    view_result(view, diagnostics)
}

// ============================================================================
// UPLOAD
// ============================================================================

/// Upload NDJSON result log text.
pub fn upload_logs(session: &mut Session, text: &str) -> TableResult {
    log_enter!("LOGS", "upload_logs", "len={}", text.len());

    let options = session.config.ingest;
    let result = match normalize(text, &options) {
        Ok(ingested) => install_log(session, ingested),
        Err(e) => {
            log_error!("LOGS", "Result log rejected: {}", e);
            TableResult::err(e.to_string())
        }
    };

    log_exit!("LOGS", "upload_logs", "success={}", result.success);
    result
}

pub fn upload_logs_file(session: &mut Session, path: &Path) -> TableResult {
    log_enter!("LOGS", "upload_logs_file", "{}", path.display());

    let options = session.config.ingest;
    let result = match load_log(path, &options) {
        Ok(ingested) => install_log(session, ingested),
        Err(e) => {
            log_error!("LOGS", "Result log file rejected: {}", e);
            TableResult::err(e.to_string())
        }
    };

    log_exit!("LOGS", "upload_logs_file", "success={}", result.success);
    result
}

// ============================================================================
// TABLE INTERACTION
// ============================================================================

/// Filter dropdown change. `"All"` clears the column's filter.
pub fn set_log_filter(session: &mut Session, column: &str, value: &str) -> TableResult {
    let table = match session.business_rules.as_mut() {
        Some(table) => table,
        None => return TableResult::err(NO_LOGS),
    };

    match table.set_filter(column, value) {
        Ok(visible) => {
            log_debug!("LOGS", "Filter {} = {:?}: {} rows", column, value, visible.len());
            view_result(table.view(), Vec::new())
        }
        Err(e) => {
            log_warn!("LOGS", "set_log_filter: {}", e);
            TableResult::err(e.to_string())
        }
    }
}

pub fn clear_log_filters(session: &mut Session) -> TableResult {
    match session.business_rules.as_mut() {
        Some(table) => {
            table.clear_filters();
            view_result(table.view(), Vec::new())
        }
        None => TableResult::err(NO_LOGS),
    }
}

/// Header click. Same column toggles direction, another column sorts ascending.
pub fn sort_logs(session: &mut Session, column: &str) -> TableResult {
    let table = match session.business_rules.as_mut() {
        Some(table) => table,
        None => return TableResult::err(NO_LOGS),
    };

    match table.sort_by(column) {
        Ok(_) => {
            log_debug!(
                "LOGS",
                "Sorted by {} {:?}",
                column,
                table.sort_spec().direction
            );
            view_result(table.view(), Vec::new())
        }
        Err(e) => {
            log_warn!("LOGS", "sort_logs: {}", e);
            TableResult::err(e.to_string())
        }
    }
}

/// Dropdown entries for one column: "All" then each distinct value.
pub fn get_filter_options(session: &Session, column: &str) -> FilterOptionsResult {
    let failure = |message: String| FilterOptionsResult {
        success: false,
        column: column.to_string(),
        options: Vec::new(),
        error: Some(message),
    };

    let table = match session.business_rules.as_ref() {
        Some(table) => table,
        None => return failure(NO_LOGS.to_string()),
    };

    match table.filter_options(column) {
        Ok(options) => FilterOptionsResult {
            success: true,
            column: column.to_string(),
            options,
            error: None,
        },
        Err(e) => {
            log_warn!("LOGS", "get_filter_options: {}", e);
            failure(e.to_string())
        }
    }
}

pub fn get_log_view(session: &Session) -> TableResult {
    match session.business_rules.as_ref() {
        Some(table) => view_result(table.view(), Vec::new()),
        None => TableResult::err(NO_LOGS),
    }
}

// ============================================================================
// QUERIES
// ============================================================================

/// Run a fixed query over the whole upload, ignoring filters and sort.
pub fn run_log_query(session: &mut Session, kind: QueryKind) -> QueryResponse {
    let table = match session.business_rules.as_ref() {
        Some(table) => table,
        None => return QueryResponse::err(NO_LOGS),
    };

    let result = table.query(kind);
    log_info!("LOGS", "Query {}: {} matches", kind.label(), result.len());

    let view = QueryView::from_result(&result);
    session.query = Some(result);
    QueryResponse {
        success: true,
        view: Some(view),
        error: None,
    }
}

/// The open query dialog, if any.
pub fn get_query_view(session: &Session) -> QueryResponse {
    QueryResponse {
        success: true,
        view: session.query.as_ref().map(QueryView::from_result),
        error: None,
    }
}

pub fn close_query(session: &mut Session) -> QueryResponse {
    session.query = None;
    QueryResponse {
        success: true,
        view: None,
        error: None,
    }
}
