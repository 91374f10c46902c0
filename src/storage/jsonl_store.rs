//! JSON Lines scan report storage.
//!
//! Every run appends one self-contained JSON object followed by a newline.
//! Existing records are never rewritten or truncated.

use crate::error::{StorageError, StorageResult};
use crate::storage::report::ScanReport;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default report file, relative to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "open_ports.jsonl";

/// Append-only JSON Lines report log.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    /// Create a store backed by `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a report as a single line.
    pub fn append(&self, report: &ScanReport) -> StorageResult<()> {
        let mut line = serde_json::to_vec(report)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StorageError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(&line)
            .and_then(|()| file.sync_data())
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            open_ports = report.open_ports.len(),
            "appended scan report"
        );
        Ok(())
    }

    /// Load every record in the file, oldest first.
    ///
    /// A missing file holds no records.
    pub fn load_all(&self) -> StorageResult<Vec<ScanReport>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Open {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line).map_err(|e| StorageError::Corrupt {
                    path: self.path.clone(),
                    line: idx + 1,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}
