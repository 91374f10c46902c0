//! TCP connect dialer.
//!
//! Performs standard TCP connect probes using the operating system's
//! socket API. A connection that completes is closed immediately without
//! sending or reading anything.

use crate::scanner::traits::Dialer;
use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Format a dialable `host:port` address.
///
/// IPv6 literals are bracketed. IPv4 literals and hostnames are not.
pub fn format_address(host: &str, port: u16) -> String {
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("[{}]:{}", host, port),
        _ => format!("{}:{}", host, port),
    }
}

/// TCP connect dialer.
///
/// Hostnames are resolved on every probe, inside the timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

impl TcpDialer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Dialer for TcpDialer {
    async fn probe(&self, host: &str, port: u16, limit: Duration) -> bool {
        let addr = format_address(host, port);

        match timeout(limit, TcpStream::connect(addr.as_str())).await {
            Ok(Ok(stream)) => {
                drop(stream);
                true
            }
            Ok(Err(e)) => {
                tracing::trace!(%addr, error = %e, "connect failed");
                false
            }
            Err(_) => {
                tracing::trace!(%addr, "connect timed out");
                false
            }
        }
    }
}
