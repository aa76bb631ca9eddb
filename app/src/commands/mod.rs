//! FILENAME: app/src/commands/mod.rs
// PURPOSE: Command handlers, one module per tab.

pub mod result_logs;
pub mod test_plan;

pub use result_logs::*;
pub use test_plan::*;
