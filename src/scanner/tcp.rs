//! TCP connect prober.
//!
//! Uses the operating system's socket API to complete a full TCP handshake.
//! No data is exchanged; the connection is dropped as soon as it is up.

use crate::scanner::traits::{PortState, Prober};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// TCP connect prober. Does not require elevated privileges.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

impl TcpProber {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, host: &str, port: u16, limit: Duration) -> PortState {
        // Name resolution runs inside the timeout too.
        match timeout(limit, TcpStream::connect((host, port))).await {
            Ok(Ok(stream)) => {
                drop(stream);
                PortState::Open
            }
            Ok(Err(e)) => {
                trace!(host, port, error = %e, "connect failed");
                PortState::Closed
            }
            Err(_) => {
                trace!(host, port, timeout_ms = limit.as_millis() as u64, "connect timed out");
                PortState::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let state = TcpProber::new()
            .probe("127.0.0.1", port, Duration::from_secs(1))
            .await;
        assert_eq!(state, PortState::Open);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let state = TcpProber::new()
            .probe("127.0.0.1", port, Duration::from_secs(1))
            .await;
        assert_eq!(state, PortState::Closed);
    }

    #[tokio::test]
    #[ignore = "needs a resolver that fails .invalid names"]
    async fn test_probe_unresolvable_host() {
        let state = TcpProber::new()
            .probe("no-such-host.invalid", 80, Duration::from_secs(2))
            .await;
        assert_eq!(state, PortState::Closed);
    }

    #[tokio::test]
    #[ignore = "needs 10.255.255.1 to be unroutable from the test host"]
    async fn test_probe_respects_timeout() {
        // Either the address black-holes and the timeout fires, or the stack
        // rejects it straight away.
        let limit = Duration::from_secs(1);
        let start = Instant::now();
        let state = TcpProber::new().probe("10.255.255.1", 80, limit).await;

        assert_eq!(state, PortState::Closed);
        assert!(start.elapsed() < limit + Duration::from_secs(2));
    }
}
