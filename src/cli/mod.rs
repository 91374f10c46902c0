//! Command-line interface definitions for portsweep.
//!
//! Uses `clap` derive macros. There are no subcommands: every invocation is
//! one scan. Each flag can also be set through a `PORTSWEEP_*` environment
//! variable.

mod scan;

pub use scan::{execute, execute_with};

use crate::config::{
    parse_port_bound, parse_timeout, parse_workers, ScanSettings, DEFAULT_END_PORT, DEFAULT_HOST,
    DEFAULT_SERVICES_FILE, DEFAULT_START_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS,
};
use crate::error::ConfigResult;
use crate::storage::DEFAULT_REPORT_FILE;
use crate::types::PortRange;
use clap::Parser;
use std::path::PathBuf;

/// A concurrent TCP connect port scanner.
///
/// Scans a port range on one host, prints a line per port and appends a
/// JSON report of the open ports to a JSON Lines file.
#[derive(Parser, Debug)]
#[command(name = "portsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A concurrent TCP connect port scanner", long_about = None)]
pub struct Cli {
    /// Target IP address or hostname to scan
    #[arg(long, env = "PORTSWEEP_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// First port of the range (inclusive)
    #[arg(long, env = "PORTSWEEP_START", default_value_t = DEFAULT_START_PORT as i64, allow_negative_numbers = true)]
    pub start: i64,

    /// Last port of the range (inclusive)
    #[arg(long, env = "PORTSWEEP_END", default_value_t = DEFAULT_END_PORT as i64, allow_negative_numbers = true)]
    pub end: i64,

    /// Connection timeout in seconds
    #[arg(long, env = "PORTSWEEP_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of concurrent workers
    #[arg(long, env = "PORTSWEEP_WORKERS", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Service catalog (JSON object of port -> service name)
    #[arg(long, env = "PORTSWEEP_SERVICES", value_name = "PATH", default_value = DEFAULT_SERVICES_FILE)]
    pub services: PathBuf,

    /// JSON Lines file the scan report is appended to
    #[arg(long, env = "PORTSWEEP_OUTPUT", value_name = "PATH", default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Print only open ports
    #[arg(long)]
    pub open_only: bool,

    /// Don't append the scan report
    #[arg(long)]
    pub no_save: bool,

    /// Show a progress bar while scanning
    #[arg(long)]
    pub progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the raw flags into scan settings.
    pub fn settings(&self) -> ConfigResult<ScanSettings> {
        let start = parse_port_bound("start", self.start)?;
        let end = parse_port_bound("end", self.end)?;

        Ok(ScanSettings {
            host: self.host.clone(),
            range: PortRange::new(start, end),
            timeout: parse_timeout(self.timeout)?,
            workers: parse_workers(self.workers)?,
            services_path: self.services.clone(),
            report_path: self.output.clone(),
            open_only: self.open_only,
            save: !self.no_save,
            progress: self.progress,
        })
    }
}
