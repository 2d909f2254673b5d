//! JSON output formatting.

use super::PortPrinter;
use crate::scanner::PortState;
use crate::types::PortMap;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Prints a single JSON object such as `{"22":"OPEN","23":"CLOSE"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPrinter {
    show_all: bool,
}

impl JsonPrinter {
    /// Without `show_all`, closed ports are left out of the object.
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }
}

impl PortPrinter for JsonPrinter {
    fn write_ports(&self, out: &mut dyn Write, ports: &PortMap) -> io::Result<()> {
        // Integer keys serialize as strings, in ascending numeric order.
        let shown: BTreeMap<u16, PortState> = ports
            .iter()
            .filter(|(_, state)| state.is_open() || self.show_all)
            .collect();

        serde_json::to_writer(&mut *out, &shown)?;
        writeln!(out)
    }
}
