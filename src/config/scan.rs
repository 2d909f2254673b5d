//! Validated, immutable input to a scan.

use crate::error::{ScanError, ScanResult};
use crate::types::PortRange;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Everything the batch driver needs to run a scan.
///
/// Built once through [`ScanConfig::new`], which rejects a zero batch size,
/// a zero timeout and an empty target. There are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    target: String,
    range: PortRange,
    timeout: Duration,
    batch_size: NonZeroUsize,
}

impl ScanConfig {
    /// Create a scan configuration.
    ///
    /// # Arguments
    /// * `target` - Hostname or IP address, without a port
    /// * `range` - Ports to probe
    /// * `timeout_secs` - Per-probe connect timeout in whole seconds
    /// * `batch_size` - Number of probes in flight per batch
    pub fn new(
        target: impl Into<String>,
        range: PortRange,
        timeout_secs: u64,
        batch_size: usize,
    ) -> ScanResult<Self> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(ScanError::InvalidConfig("target address is empty".to_string()));
        }
        if timeout_secs == 0 {
            return Err(ScanError::InvalidConfig(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        let batch_size = NonZeroUsize::new(batch_size).ok_or_else(|| {
            ScanError::InvalidConfig("batch size must be greater than 0".to_string())
        })?;

        Ok(Self {
            target,
            range,
            timeout: Duration::from_secs(timeout_secs),
            batch_size,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn range(&self) -> PortRange {
        self.range
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }
}
