//! Dialer trait abstraction and per-port results.
//!
//! The pool only needs an open/closed verdict per port, so the seam between
//! scanning and networking is a single async `probe` call. Tests substitute
//! scripted dialers for the TCP one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Result of scanning a single port.
///
/// Exactly one is produced per scanned port and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortResult {
    /// The port number that was scanned.
    pub port: u16,
    /// Whether a TCP connection was accepted within the timeout.
    pub open: bool,
    /// Service name from the catalog.
    pub service: String,
}

impl PortResult {
    /// Create a new port result.
    pub fn new(port: u16, open: bool, service: impl Into<String>) -> Self {
        Self {
            port,
            open,
            service: service.into(),
        }
    }

    /// Console label for the verdict.
    pub fn state_label(&self) -> &'static str {
        if self.open {
            "OPEN"
        } else {
            "CLOSED"
        }
    }
}

impl fmt::Display for PortResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Port {} ({}) {}",
            self.port,
            self.service,
            self.state_label()
        )
    }
}

/// Trait for connection probes.
///
/// Implementations must never fail: refused, unreachable, timed out and
/// unresolvable targets all collapse to `false`.
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Attempt a connection to `host:port`, bounded by `timeout`.
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> bool;
}

/// A shared dialer for dynamic dispatch across workers.
pub type SharedDialer = Arc<dyn Dialer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_result_display() {
        let open = PortResult::new(80, true, "http");
        assert_eq!(open.to_string(), "Port 80 (http) OPEN");

        let closed = PortResult::new(81, false, "unknown service");
        assert_eq!(closed.to_string(), "Port 81 (unknown service) CLOSED");
    }

    #[test]
    fn test_state_label() {
        assert_eq!(PortResult::new(1, true, "x").state_label(), "OPEN");
        assert_eq!(PortResult::new(1, false, "x").state_label(), "CLOSED");
    }
}
