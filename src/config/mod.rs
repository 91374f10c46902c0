//! Configuration management.

mod settings;

pub use settings::{
    parse_port_bound, parse_timeout, parse_workers, ScanSettings, DEFAULT_END_PORT, DEFAULT_HOST,
    DEFAULT_SERVICES_FILE, DEFAULT_START_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS,
};
