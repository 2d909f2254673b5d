use anyhow::Context;
use clap::Parser;
use port_scanner::cli::{self, Args};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let result = runtime.block_on(cli::run(args));
    let code = cli::finish(result);

    Ok(code)
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over
/// the defaults.
fn init_tracing(verbose: bool) {
    let default = if verbose { "port_scanner=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
