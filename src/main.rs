//! Ledger CLI entry point.

use std::io;
use std::process::ExitCode;

use ledger::cli::{execute, report_parse_error, Registry};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ledger=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ledger=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let registry = Registry::new();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let cli = match registry.parse(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let code = report_parse_error(err, &mut stdout, &mut stderr);
            return ExitCode::from(code as u8);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("ledger starting with args: {:?}", cli);
    tracing::debug!("registered subcommands: {:?}", registry.names());

    let code = execute(&registry, &cli, &mut stdout, &mut stderr);
    ExitCode::from(code as u8)
}
