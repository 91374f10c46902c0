//! Scan report assembly and persistence.

mod jsonl_store;
mod report;

pub use jsonl_store::{ReportStore, DEFAULT_REPORT_FILE};
pub use report::{report_order, sort_results, OpenPort, ScanReport};
