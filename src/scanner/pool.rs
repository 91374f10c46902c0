//! Fixed-size worker pool.
//!
//! The calling task feeds every port of the range into a bounded queue and
//! then closes it. `workers` tasks share the receiving end, so each port is
//! taken by exactly one worker. Results land in a mutex-guarded vector that
//! is only handed out once every worker has exited.

use crate::error::{ScanError, ScanResult};
use crate::scanner::traits::{PortResult, SharedDialer};
use crate::services::ServiceCatalog;
use crate::types::PortRange;
use futures::future::join_all;
use indicatif::ProgressBar;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

/// Capacity of the port queue between the feeder and the workers.
pub const QUEUE_CAPACITY: usize = 100;

/// A pool of concurrent dial workers.
pub struct WorkerPool {
    workers: NonZeroUsize,
    dialer: SharedDialer,
    catalog: Arc<ServiceCatalog>,
    progress: Option<ProgressBar>,
}

impl WorkerPool {
    /// Create a new worker pool.
    ///
    /// # Arguments
    /// * `workers` - Number of concurrent workers
    /// * `dialer` - Probe used for every port
    /// * `catalog` - Service names, shared read-only by all workers
    pub fn new(workers: NonZeroUsize, dialer: SharedDialer, catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            workers,
            dialer,
            catalog,
            progress: None,
        }
    }

    /// Tick a progress bar once per scanned port.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Scan every port in `range` and return one result per port.
    ///
    /// Blocks until all workers have drained the queue and exited. Results
    /// are in completion order.
    pub async fn run(
        &self,
        host: &str,
        range: PortRange,
        timeout: Duration,
    ) -> ScanResult<Vec<PortResult>> {
        let (tx, rx) = mpsc::channel::<u16>(QUEUE_CAPACITY);
        let queue = Arc::new(Mutex::new(rx));
        let results = Arc::new(Mutex::new(Vec::with_capacity(range.len())));
        let host: Arc<str> = Arc::from(host);

        tracing::info!(%host, %range, workers = self.workers(), "starting worker pool");

        let handles: Vec<_> = (0..self.workers())
            .map(|id| {
                let worker = Worker {
                    id,
                    host: Arc::clone(&host),
                    timeout,
                    dialer: Arc::clone(&self.dialer),
                    catalog: Arc::clone(&self.catalog),
                    queue: Arc::clone(&queue),
                    results: Arc::clone(&results),
                    progress: self.progress.clone(),
                };
                tokio::spawn(worker.run())
            })
            .collect();

        for port in range.iter() {
            if tx.send(port).await.is_err() {
                // Every receiver is gone, which only happens if all workers died.
                tracing::warn!(port, "work queue closed before all ports were queued");
                break;
            }
        }
        drop(tx);

        let mut failure = None;
        for joined in join_all(handles).await {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "scan worker did not finish");
                failure.get_or_insert(e);
            }
        }
        if let Some(e) = failure {
            return Err(ScanError::WorkerFailed(e.to_string()));
        }

        let results = match Arc::try_unwrap(results) {
            Ok(results) => results.into_inner(),
            // Unreachable once every worker has joined; copy rather than panic.
            Err(shared) => shared.lock().await.clone(),
        };

        tracing::info!(scanned = results.len(), "worker pool drained");
        Ok(results)
    }
}

struct Worker {
    id: usize,
    host: Arc<str>,
    timeout: Duration,
    dialer: SharedDialer,
    catalog: Arc<ServiceCatalog>,
    queue: Arc<Mutex<mpsc::Receiver<u16>>>,
    results: Arc<Mutex<Vec<PortResult>>>,
    progress: Option<ProgressBar>,
}

impl Worker {
    async fn run(self) {
        let mut handled = 0usize;

        loop {
            // The queue lock is released before dialing so other workers can dequeue.
            let next = self.queue.lock().await.recv().await;
            let Some(port) = next else { break };

            let open = self.dialer.probe(&self.host, port, self.timeout).await;
            let result = PortResult::new(port, open, self.catalog.name_for(port));
            tracing::debug!(worker = self.id, port, open, "probed");

            self.results.lock().await.push(result);
            handled += 1;

            if let Some(ref pb) = self.progress {
                pb.inc(1);
                if open {
                    pb.set_message(format!("found open port: {}", port));
                }
            }
        }

        tracing::trace!(worker = self.id, handled, "worker exiting");
    }
}
