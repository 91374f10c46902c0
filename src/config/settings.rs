//! Runtime scan settings.
//!
//! `ScanSettings` is the validated form of the command-line flags. Raw
//! integer flags are checked here, before anything touches the filesystem
//! or the network.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::DEFAULT_REPORT_FILE;
use crate::types::PortRange;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "scanme.nmap.org";
pub const DEFAULT_START_PORT: u16 = 1;
pub const DEFAULT_END_PORT: u16 = 6000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 1;
pub const DEFAULT_WORKERS: usize = 100;
pub const DEFAULT_SERVICES_FILE: &str = "services.json";

/// Validated settings for one scan run.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Target host: IPv4/IPv6 literal or hostname.
    pub host: String,
    /// Ports to scan. May be empty.
    pub range: PortRange,
    /// Per-connection timeout.
    pub timeout: Duration,
    /// Number of concurrent workers.
    pub workers: NonZeroUsize,
    /// Service catalog file.
    pub services_path: PathBuf,
    /// JSON Lines report file.
    pub report_path: PathBuf,
    /// Print only open ports on the console.
    pub open_only: bool,
    /// Append the report to `report_path`.
    pub save: bool,
    /// Show a progress bar while scanning.
    pub progress: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            range: PortRange::new(DEFAULT_START_PORT, DEFAULT_END_PORT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            workers: NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN),
            services_path: PathBuf::from(DEFAULT_SERVICES_FILE),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            open_only: false,
            save: true,
            progress: false,
        }
    }
}

/// Convert a raw `--start`/`--end` value to a port number.
pub fn parse_port_bound(flag: &'static str, value: i64) -> ConfigResult<u16> {
    u16::try_from(value).map_err(|_| ConfigError::PortOutOfRange { flag, value })
}

/// Convert a raw `--timeout` value in seconds to a per-connection timeout.
///
/// Zero is rejected; there is no "no timeout" mode.
pub fn parse_timeout(secs: u64) -> ConfigResult<Duration> {
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(Duration::from_secs(secs))
}

/// Convert a raw `--workers` value to a worker count.
pub fn parse_workers(value: usize) -> ConfigResult<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or(ConfigError::NoWorkers)
}
