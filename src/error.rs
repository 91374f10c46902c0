//! Error types for portsweep.
//!
//! Uses `thiserror` for ergonomic error definitions. Per-port connection
//! failures are deliberately absent: a failed dial is a closed port, not an
//! error.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the service catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read service catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid service catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to persist or read back scan reports.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to open report file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("corrupt record at {path} line {line}: {reason}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// Invalid runtime configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--{flag} {value} is outside the valid port range (0-65535)")]
    PortOutOfRange { flag: &'static str, value: i64 },

    #[error("--workers must be at least 1")]
    NoWorkers,

    #[error("--timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Failure inside the worker pool itself (not a port verdict).
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scan worker failed: {0}")]
    WorkerFailed(String),
}

/// Top-level error for the scan command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
pub type StorageResult<T> = Result<T, StorageError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ScanResult<T> = Result<T, ScanError>;
pub type CliResult<T> = Result<T, CliError>;
