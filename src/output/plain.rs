//! Plain text output formatting.

use super::PortPrinter;
use crate::config::ScanConfig;
use crate::types::PortMap;
use console::style;
use std::io::{self, Write};
use std::time::Duration;

/// Prints `PORT - OPEN` lines in ascending port order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPrinter {
    show_all: bool,
}

impl TextPrinter {
    /// With `show_all`, closed ports are printed as `PORT - CLOSE`.
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }
}

impl PortPrinter for TextPrinter {
    fn write_ports(&self, out: &mut dyn Write, ports: &PortMap) -> io::Result<()> {
        for (port, state) in ports.iter() {
            if state.is_open() || self.show_all {
                writeln!(out, "{} - {}", port, state)?;
            }
        }
        Ok(())
    }
}

/// Print the scan parameters before scanning begins.
pub fn print_scan_header(config: &ScanConfig) {
    println!(
        "Scanning {} with range {}",
        style(config.target()).bold(),
        config.range()
    );
    println!(
        "batch size: {}; timeout: {} sec",
        config.batch_size(),
        config.timeout().as_secs()
    );
}

/// Print the elapsed time once results are out.
pub fn print_scan_footer(elapsed: Duration) {
    println!();
    println!("Scanned in {} seconds (^_^)", elapsed.as_secs());
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::PortState;

    fn sample() -> PortMap {
        let mut ports = PortMap::new();
        ports.insert(443, PortState::Open);
        ports.insert(21, PortState::Closed);
        ports.insert(22, PortState::Open);
        ports
    }

    fn render(printer: TextPrinter, ports: &PortMap) -> String {
        let mut out = Vec::new();
        printer.write_ports(&mut out, ports).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_open_only() {
        assert_eq!(render(TextPrinter::new(false), &sample()), "22 - OPEN\n443 - OPEN\n");
    }

    #[test]
    fn test_show_all() {
        assert_eq!(
            render(TextPrinter::new(true), &sample()),
            "21 - CLOSE\n22 - OPEN\n443 - OPEN\n"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(render(TextPrinter::new(true), &PortMap::new()), "");
    }
}
