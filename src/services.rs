//! Service name lookup based on port numbers.
//!
//! The catalog is a flat JSON object mapping decimal port strings to
//! service names, e.g. `{"22": "ssh", "80": "http"}`. It is loaded once
//! before scanning and only read afterwards, so workers share it through
//! an `Arc` without locking.

use crate::error::{CatalogError, CatalogResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Label returned for ports the catalog does not know.
pub const UNKNOWN_SERVICE: &str = "unknown service";

/// Read-only map of port numbers to service names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    names: HashMap<String, String>,
}

impl ServiceCatalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let names: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(path = %path.display(), entries = names.len(), "loaded service catalog");
        Ok(Self { names })
    }

    /// Build a catalog from an in-memory map.
    pub fn from_map(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// Look up the service name for a port.
    ///
    /// Returns [`UNKNOWN_SERVICE`] when the decimal form of `port` is not a key.
    pub fn name_for(&self, port: u16) -> &str {
        self.names
            .get(&port.to_string())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_SERVICE)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
