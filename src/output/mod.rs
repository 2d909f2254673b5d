//! Output formatting module.
//!
//! Presenters for the result of a scan: one line per port, or a single JSON
//! object. Both hide closed ports unless asked to show everything.

mod json_format;
mod plain;

pub use json_format::JsonPrinter;
pub use plain::{print_error, print_scan_footer, print_scan_header, TextPrinter};

use crate::types::PortMap;
use std::io::{self, Write};

/// Renders a finished scan.
pub trait PortPrinter {
    /// Write the rendering of `ports` to `out`.
    fn write_ports(&self, out: &mut dyn Write, ports: &PortMap) -> io::Result<()>;

    /// Print `ports` to stdout.
    fn print_ports(&self, ports: &PortMap) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_ports(&mut out, ports)?;
        out.flush()
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `PORT - STATE` lines
    #[default]
    Plain,
    /// JSON object keyed by port
    Json,
}

/// Build the presenter for `format`.
pub fn printer(format: OutputFormat, show_all: bool) -> Box<dyn PortPrinter> {
    match format {
        OutputFormat::Plain => Box::new(TextPrinter::new(show_all)),
        OutputFormat::Json => Box::new(JsonPrinter::new(show_all)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::PortState;

    #[test]
    fn test_printer_selects_format() {
        let mut ports = PortMap::new();
        ports.insert(80, PortState::Open);

        let mut plain = Vec::new();
        printer(OutputFormat::Plain, false)
            .write_ports(&mut plain, &ports)
            .unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "80 - OPEN\n");

        let mut json = Vec::new();
        printer(OutputFormat::Json, false)
            .write_ports(&mut json, &ports)
            .unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), "{\"80\":\"OPEN\"}\n");
    }
}
