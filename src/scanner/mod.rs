//! Scanner module - the batched concurrent scan engine.
//!
//! A scan walks its port range batch by batch. Each batch spawns one probe
//! task per port on the tokio runtime and is fully drained before the next
//! one starts, so at most `batch_size` sockets are ever open at once.

pub mod tcp;
pub mod traits;

use crate::config::ScanConfig;
use crate::types::{PortMap, PortRange};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub use tcp::TcpProber;
pub use traits::{PortState, Prober};

/// Drives a scan described by a [`ScanConfig`].
pub struct BatchScanner {
    config: ScanConfig,
    prober: Arc<dyn Prober>,
    progress: bool,
}

impl BatchScanner {
    /// Create a scanner that probes with TCP connect.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_prober(config, Arc::new(TcpProber::new()))
    }

    /// Create a scanner with a custom prober.
    pub fn with_prober(config: ScanConfig, prober: Arc<dyn Prober>) -> Self {
        Self {
            config,
            prober,
            progress: false,
        }
    }

    /// Show a progress bar on stderr while scanning.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan every port of the configured range.
    ///
    /// The returned map holds exactly one entry per port in the range.
    pub async fn scan(&self) -> PortMap {
        let range = self.config.range();
        let batch_size = self.config.batch_size();
        let host: Arc<str> = Arc::from(self.config.target());
        let start = Instant::now();

        info!(
            host = %host,
            range = %range,
            batch_size = batch_size.get(),
            timeout_secs = self.config.timeout().as_secs(),
            "starting scan"
        );

        let progress = self.progress.then(|| progress_bar(range.len()));
        let mut ports = PortMap::new();

        for (index, batch) in range.batches(batch_size).enumerate() {
            debug!(batch = index, first = batch.first(), last = batch.last(), "starting batch");
            self.run_batch(batch, &host, &mut ports, progress.as_ref())
                .await;
            debug!(batch = index, "batch drained");
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Scan complete");
        }

        info!(
            scanned = ports.len(),
            open = ports.open_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan finished"
        );

        ports
    }

    /// Probe every port of `batch` concurrently and wait for all of them.
    ///
    /// Tasks only hand their result back through the join set; this
    /// function is the single writer of `ports`.
    async fn run_batch(
        &self,
        batch: PortRange,
        host: &Arc<str>,
        ports: &mut PortMap,
        progress: Option<&ProgressBar>,
    ) {
        let timeout = self.config.timeout();
        let mut tasks = JoinSet::new();

        for port in batch {
            let prober = Arc::clone(&self.prober);
            let host = Arc::clone(host);
            tasks.spawn(async move { (port, prober.probe(&host, port, timeout).await) });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((port, state)) => {
                    ports.insert(port, state);
                    if let Some(pb) = progress {
                        pb.inc(1);
                        if state.is_open() {
                            pb.set_message(format!("Found open port: {}", port));
                        }
                    }
                }
                Err(e) => warn!(error = %e, "probe task did not complete"),
            }
        }

        // A task that died never reported back.
        for port in batch {
            if !ports.contains(port) {
                ports.insert(port, PortState::Closed);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
            }
        }
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
