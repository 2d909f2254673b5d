//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing. Flags left
//! unset fall back to the settings file, then to built-in defaults.

use crate::config::{AppSettings, ScanConfig};
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use crate::scanner::BatchScanner;
use crate::types::PortRange;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

/// A batched TCP connect port scanner.
#[derive(Parser, Debug)]
#[command(name = "port-scanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a range of TCP ports in fixed-size batches", long_about = None)]
pub struct Args {
    /// Target address (hostname or IP, without a port)
    #[arg(long, value_name = "HOST")]
    pub addr: Option<String>,

    /// Port scanning range (e.g. "80", "0-1023", "5000-6000")
    #[arg(short, long, value_name = "RANGE")]
    pub ports: Option<String>,

    /// Seconds after which a connection attempt is abandoned
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Number of ports scanned at one time
    #[arg(short, long, value_name = "N")]
    pub batch: Option<usize>,

    /// Print closed ports as well as open ones
    #[arg(short, long)]
    pub all: bool,

    /// Print results as a JSON object on stdout
    #[arg(long)]
    pub json: bool,

    /// Show a progress bar and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Flag values after settings-file fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    addr: String,
    ports: String,
    timeout: u64,
    batch: usize,
}

impl Args {
    fn resolve(&self, settings: AppSettings) -> Resolved {
        Resolved {
            addr: self.addr.clone().unwrap_or(settings.default_target),
            ports: self.ports.clone().unwrap_or(settings.default_ports),
            timeout: self.timeout.unwrap_or(settings.default_timeout_secs),
            batch: self.batch.unwrap_or(settings.default_batch_size),
        }
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// A bare port (no dash) always reports closed ports too.
fn show_all(all: bool, ports: &str) -> bool {
    all || !ports.contains('-')
}

/// Run a scan as described by `args` and print the result.
///
/// A malformed range string is returned as an error. A well-formed range
/// that is out of bounds or inverted prints a notice and returns without
/// scanning.
pub async fn run(args: Args) -> CliResult<()> {
    let settings = match &args.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };
    let resolved = args.resolve(settings);

    let range: PortRange = match resolved.ports.parse() {
        Ok(range) => range,
        Err(e) if e.is_syntax() => return Err(e.into()),
        Err(e) => {
            debug!(error = %e, "range rejected");
            println!(
                "Wrong range syntax. Notice that port minimal value is 0 and maximum is 65535."
            );
            return Ok(());
        }
    };

    let config = ScanConfig::new(resolved.addr, range, resolved.timeout, resolved.batch)?;
    let format = args.format();
    let scanner =
        BatchScanner::new(config).with_progress(args.verbose && format == OutputFormat::Plain);

    if format == OutputFormat::Plain {
        output::print_scan_header(scanner.config());
    }

    let start = Instant::now();
    let ports = scanner.scan().await;

    output::printer(format, show_all(args.all, &resolved.ports)).print_ports(&ports)?;

    if format == OutputFormat::Plain {
        output::print_scan_footer(start.elapsed());
    }

    Ok(())
}

/// Report the outcome of [`run`] and pick the process exit status.
///
/// A malformed range prints `Wrong range syntax.` on stdout; any other
/// error goes to stderr. Both exit with 1.
pub fn finish(result: CliResult<()>) -> ExitCode {
    let status = exit_status(&result);
    match result {
        Ok(()) => {}
        Err(CliError::Port(e)) if e.is_syntax() => println!("Wrong range syntax."),
        Err(e) => output::print_error(&e.to_string()),
    }
    ExitCode::from(status)
}

fn exit_status(result: &CliResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
