//! Scan report assembly.
//!
//! Turns the unordered per-port results of a pool run into the final,
//! deterministically ordered `ScanReport`.

use crate::config::ScanSettings;
use crate::scanner::PortResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;

/// An open port as persisted in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPort {
    pub port: u16,
    pub service: String,
}

impl From<&PortResult> for OpenPort {
    fn from(result: &PortResult) -> Self {
        Self {
            port: result.port,
            service: result.service.clone(),
        }
    }
}

/// The single structured record produced per scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Target host as given on the command line.
    pub host: String,
    pub start_port: u16,
    pub end_port: u16,
    pub timeout_seconds: u64,
    pub worker_count: usize,
    /// Wall-clock time from pool launch to pool join.
    pub duration_seconds: f64,
    /// UTC completion time.
    #[serde(with = "rfc3339_seconds")]
    pub timestamp: DateTime<Utc>,
    /// Open ports only, ascending.
    pub open_ports: Vec<OpenPort>,
    /// Every scanned port in report order; kept for console display only.
    #[serde(skip)]
    pub results: Vec<PortResult>,
}

impl ScanReport {
    /// Build the report from a drained pool's results.
    pub fn finalize(settings: &ScanSettings, mut results: Vec<PortResult>, elapsed: Duration) -> Self {
        sort_results(&mut results);

        let open_ports = results
            .iter()
            .filter(|r| r.open)
            .map(OpenPort::from)
            .collect();

        Self {
            host: settings.host.clone(),
            start_port: settings.range.start(),
            end_port: settings.range.end(),
            timeout_seconds: settings.timeout.as_secs(),
            worker_count: settings.workers.get(),
            duration_seconds: elapsed.as_secs_f64(),
            timestamp: Utc::now(),
            open_ports,
            results,
        }
    }

    /// Number of ports scanned in this run.
    pub fn ports_scanned(&self) -> usize {
        self.results.len()
    }

    /// Get a short summary of the scan.
    pub fn summary(&self) -> String {
        format!(
            "{} open / {} scanned on {} in {:.2}s",
            self.open_ports.len(),
            self.ports_scanned(),
            self.host,
            self.duration_seconds
        )
    }
}

/// Report ordering: open before closed, then ascending port.
pub fn report_order(a: &PortResult, b: &PortResult) -> Ordering {
    b.open.cmp(&a.open).then(a.port.cmp(&b.port))
}

/// Sort results into report order.
pub fn sort_results(results: &mut [PortResult]) {
    results.sort_by(report_order);
}

/// RFC 3339 timestamps at second precision with a `Z` suffix.
mod rfc3339_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
