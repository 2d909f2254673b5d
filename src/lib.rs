//! # port-scanner - a batched TCP connect port scanner
//!
//! Probes a contiguous range of TCP ports on one host and reports each port
//! as open or closed. Probes run concurrently, but in fixed-size batches:
//! a batch is fully drained before the next one starts, which bounds the
//! number of sockets in flight to the batch size.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use port_scanner::config::ScanConfig;
//! use port_scanner::scanner::BatchScanner;
//! use port_scanner::types::PortRange;
//!
//! #[tokio::main]
//! async fn main() {
//!     let range: PortRange = "20-25".parse().unwrap();
//!     let config = ScanConfig::new("127.0.0.1", range, 2, 100).unwrap();
//!
//!     let ports = BatchScanner::new(config).scan().await;
//!     for port in ports.open_ports() {
//!         println!("{} - OPEN", port);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Port ranges, batch partitioning and the result map
//! - [`scanner`] - The batch driver and the `Prober` trait
//! - [`config`] - Scan configuration and the settings file
//! - [`output`] - Text and JSON presenters
//! - [`cli`] - Command-line front end
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{CliError, ScanError};
pub use scanner::{BatchScanner, PortState, Prober, TcpProber};
pub use types::{PortMap, PortRange};
