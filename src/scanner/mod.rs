//! Scanner module - dials ports through a fixed worker pool.
//!
//! `run_scan` covers the scanning and aggregating phases: it times the pool
//! from launch to join and hands the drained results to the aggregator.

pub mod pool;
pub mod tcp;
pub mod traits;

use crate::config::ScanSettings;
use crate::error::ScanResult;
use crate::services::ServiceCatalog;
use crate::storage::ScanReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;

pub use pool::WorkerPool;
pub use tcp::{format_address, TcpDialer};
pub use traits::{Dialer, PortResult, SharedDialer};

/// Execute a complete port scan and build its report.
pub async fn run_scan(
    settings: &ScanSettings,
    catalog: Arc<ServiceCatalog>,
    dialer: SharedDialer,
) -> ScanResult<ScanReport> {
    let mut pool = WorkerPool::new(settings.workers, dialer, catalog);

    let progress = settings.progress.then(|| progress_bar(settings.range.len() as u64));
    if let Some(ref pb) = progress {
        pool = pool.with_progress(pb.clone());
    }

    let started = Instant::now();
    let results = pool
        .run(&settings.host, settings.range, settings.timeout)
        .await?;
    let elapsed = started.elapsed();

    if let Some(pb) = progress {
        pb.finish_with_message("scan complete");
    }

    Ok(ScanReport::finalize(settings, results, elapsed))
}

fn progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    // The template is a literal; fall back to the default style if it ever stops parsing.
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .map(|s| s.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortRange;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::num::NonZeroUsize;
    use std::time::Duration;

    struct OpenSet(Vec<u16>);

    #[async_trait]
    impl Dialer for OpenSet {
        async fn probe(&self, _host: &str, port: u16, _timeout: Duration) -> bool {
            self.0.contains(&port)
        }
    }

    #[tokio::test]
    async fn test_run_scan_builds_sorted_report() {
        let mut names = HashMap::new();
        names.insert("80".to_string(), "http".to_string());
        names.insert("443".to_string(), "https".to_string());

        let settings = ScanSettings {
            host: "10.0.0.1".to_string(),
            range: PortRange::new(79, 81),
            workers: NonZeroUsize::new(2).unwrap(),
            ..ScanSettings::default()
        };

        let report = run_scan(
            &settings,
            Arc::new(ServiceCatalog::from_map(names)),
            Arc::new(OpenSet(vec![80, 443])),
        )
        .await
        .unwrap();

        let ports: Vec<u16> = report.results.iter().map(|r| r.port).collect();
        assert_eq!(ports, vec![80, 79, 81]);
        assert_eq!(report.open_ports.len(), 1);
        assert_eq!(report.open_ports[0].service, "http");
        assert_eq!(report.results[1].service, "unknown service");
    }

    #[tokio::test]
    async fn test_inverted_range_finishes_immediately() {
        let settings = ScanSettings {
            range: PortRange::new(100, 1),
            ..ScanSettings::default()
        };

        let report = run_scan(
            &settings,
            Arc::new(ServiceCatalog::default()),
            Arc::new(OpenSet(vec![50])),
        )
        .await
        .unwrap();

        assert!(report.results.is_empty());
        assert!(report.open_ports.is_empty());
        assert!(report.duration_seconds < 1.0);
        assert_eq!(report.start_port, 100);
        assert_eq!(report.end_port, 1);
    }
}
