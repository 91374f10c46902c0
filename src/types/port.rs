//! Port range type.
//!
//! `PortRange` is an inclusive range that may be empty: a range whose start
//! lies past its end scans nothing rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of ports, possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Create a new port range. `start > end` yields an empty range.
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Create a range containing a single port.
    pub const fn single(port: u16) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    pub const fn start(&self) -> u16 {
        self.start
    }

    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Check whether `port` lies inside the range.
    pub const fn contains(&self, port: u16) -> bool {
        port >= self.start && port <= self.end
    }

    /// Iterate over all ports in this range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.start..=self.end
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_range() {
        let range = PortRange::new(1, 100);
        assert_eq!(range.len(), 100);
        assert!(!range.is_empty());
        assert!(range.contains(1));
        assert!(range.contains(100));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_full_range() {
        let range = PortRange::new(0, 65535);
        assert_eq!(range.len(), 65536);
        assert_eq!(range.iter().count(), 65536);
        assert_eq!(range.iter().last(), Some(65535));
    }

    #[test]
    fn test_single() {
        let range = PortRange::single(80);
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![80]);
        assert_eq!(range.to_string(), "80");
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = PortRange::new(100, 50);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().count(), 0);
        assert!(!range.contains(75));
    }

    #[test]
    fn test_display() {
        assert_eq!(PortRange::new(80, 81).to_string(), "80-81");
    }
}
