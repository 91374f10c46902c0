//! Scan pipeline driver.
//!
//! Runs one scan end to end: load the catalog, scan, print, persist. A
//! catalog failure stops before any probe is sent; a persist failure comes
//! after the console output has already been shown. Console write failures
//! (a closed pipe, a full disk behind a redirect) are logged and never stop
//! the report from being persisted.

use crate::config::ScanSettings;
use crate::error::CliResult;
use crate::output;
use crate::scanner::{run_scan, SharedDialer};
use crate::services::ServiceCatalog;
use crate::storage::{ReportStore, ScanReport};
use std::io::{self, Write};
use std::sync::Arc;

/// Execute a scan with the given settings and dialer, printing to stdout.
pub async fn execute(settings: &ScanSettings, dialer: SharedDialer) -> CliResult<ScanReport> {
    execute_with(settings, dialer, &mut io::stdout()).await
}

/// Execute a scan, writing console output to `console`.
pub async fn execute_with<W: Write>(
    settings: &ScanSettings,
    dialer: SharedDialer,
    console: &mut W,
) -> CliResult<ScanReport> {
    let catalog = Arc::new(ServiceCatalog::load(&settings.services_path)?);

    console_write(output::print_scan_header(
        console,
        &settings.host,
        settings.range.len(),
        settings.workers.get(),
    ));

    let report = run_scan(settings, catalog, dialer).await?;

    console_write(output::print_results(console, &report, settings.open_only));
    console_write(output::print_summary(console, &report));

    if settings.save {
        let store = ReportStore::new(&settings.report_path);
        store.append(&report)?;
        console_write(output::print_success(
            console,
            &format!("Scan report appended to {}", store.path().display()),
        ));
    } else {
        tracing::info!("report not saved (--no-save)");
    }

    Ok(report)
}

fn console_write(result: io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "console output failed");
    }
}
