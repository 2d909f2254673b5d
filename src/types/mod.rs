//! Core type definitions.
//!
//! `PortRange` makes an empty or inverted scan range unrepresentable;
//! `PortMap` is the read-only result of a finished scan.

mod port;
mod port_map;

pub use port::{Batches, PortError, PortRange};
pub use port_map::PortMap;
