//! # portsweep - A concurrent TCP port scanner
//!
//! portsweep dials every port of a range on one host through a fixed pool
//! of workers, names open ports from a static service catalog, and appends
//! a JSON report of each run to a JSON Lines log.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsweep::config::ScanSettings;
//! use portsweep::scanner::{run_scan, TcpDialer};
//! use portsweep::services::ServiceCatalog;
//! use portsweep::types::PortRange;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let settings = ScanSettings {
//!         host: "127.0.0.1".to_string(),
//!         range: PortRange::new(1, 1024),
//!         ..ScanSettings::default()
//!     };
//!     let catalog = Arc::new(ServiceCatalog::load("services.json").unwrap());
//!     let report = run_scan(&settings, catalog, Arc::new(TcpDialer::new())).await.unwrap();
//!
//!     for port in &report.open_ports {
//!         println!("{} ({})", port.port, port.service);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`services`] - Port to service name catalog
//! - [`scanner`] - `Dialer` trait, TCP dialer and the worker pool
//! - [`storage`] - Report aggregation and the JSON Lines store
//! - [`config`] - Validated scan settings
//! - [`cli`] - Argument parsing and the scan pipeline
//! - [`output`] - Console formatting
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod services;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, CliError, ConfigError, ScanError, StorageError};
pub use scanner::{Dialer, PortResult, TcpDialer};
pub use services::ServiceCatalog;
pub use storage::{ReportStore, ScanReport};
pub use types::PortRange;
