//! Prober trait abstraction.
//!
//! Defines the single-port probe the batch driver fans out, so the driver
//! can be exercised with scripted probers in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// State of a scanned port.
///
/// Refused, unreachable, unresolvable and timed-out ports all collapse
/// into `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortState {
    /// The TCP handshake completed within the timeout.
    #[serde(rename = "OPEN")]
    Open,
    /// Anything else.
    #[serde(rename = "CLOSE")]
    Closed,
}

impl PortState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSE"),
        }
    }
}

/// A bounded-time reachability check of one `host:port`.
///
/// Implementations must be stateless with respect to individual probes:
/// the driver calls `probe` from many tasks at once.
///
/// # Example
///
/// ```ignore
/// use port_scanner::scanner::{Prober, PortState, TcpProber};
/// use std::time::Duration;
///
/// let state = TcpProber.probe("127.0.0.1", 22, Duration::from_secs(1)).await;
/// println!("22 is {}", state);
/// ```
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single port. Never fails: every failure is `Closed`.
    async fn probe(&self, host: &str, port: u16, timeout: Duration) -> PortState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_state_display() {
        assert_eq!(PortState::Open.to_string(), "OPEN");
        assert_eq!(PortState::Closed.to_string(), "CLOSE");
    }

    #[test]
    fn test_port_state_serialization() {
        assert_eq!(serde_json::to_string(&PortState::Open).unwrap(), "\"OPEN\"");
        assert_eq!(serde_json::to_string(&PortState::Closed).unwrap(), "\"CLOSE\"");
        let parsed: PortState = serde_json::from_str("\"CLOSE\"").unwrap();
        assert_eq!(parsed, PortState::Closed);
    }
}
