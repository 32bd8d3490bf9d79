//! Command-line interface for the Practical Ledger Framework.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`registry`] - The registered subcommand set, built once at startup
//! - [`commands`] - Command implementations
//!
//! [`run`] is the whole entry path: parse, dispatch, report. The binary
//! splits it into [`Registry::parse`] and [`execute`] so logging can be set
//! up from the parsed flags in between.

use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;

use crate::error::{LedgerError, Result};

pub mod args;
pub mod commands;
pub mod registry;

pub use args::{Cli, Commands, CompletionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use registry::Registry;

/// Parse `argv` against `registry`, run the selected command and return
/// the process exit code.
///
/// `argv[0]` is the program name. Help and version output go to `stdout`
/// with exit code 0; usage errors go to `stderr` with exit code 2.
pub fn run<I, T>(
    registry: &Registry,
    argv: I,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match registry.parse(argv) {
        Ok(cli) => execute(registry, &cli, stdout, stderr),
        Err(err) => report_parse_error(err, stdout, stderr),
    }
}

/// Run an already parsed invocation and return the process exit code.
pub fn execute(
    registry: &Registry,
    cli: &Cli,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32 {
    let dispatcher = CommandDispatcher::new(registry);
    let outcome = dispatcher.dispatch(cli, stdout).and_then(|result| {
        stdout.flush()?;
        Ok(result)
    });

    finish(outcome, stderr).exit_code
}

/// Report a parse failure and return the process exit code.
///
/// clap signals `--help` and `--version` through its error type as well;
/// those are written to `stdout` and succeed unless the write fails.
pub fn report_parse_error(
    err: clap::Error,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32 {
    let outcome = if err.use_stderr() {
        Err(LedgerError::from(err))
    } else {
        write_text(stdout, &err.render()).map(|()| CommandResult::success())
    };

    finish(outcome, stderr).exit_code
}

fn write_text(out: &mut dyn Write, text: &dyn Display) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Turn a command outcome into its final result, reporting errors on `stderr`.
fn finish(outcome: Result<CommandResult>, stderr: &mut dyn Write) -> CommandResult {
    let err = match outcome {
        Ok(result) => return result,
        Err(err) => err,
    };

    tracing::debug!("command failed: {:?}", err);
    // stderr is the last place to report to; a failure here has nowhere to go.
    let _ = match &err {
        LedgerError::Usage { .. } => write!(stderr, "{}", err),
        LedgerError::Io(_) => writeln!(stderr, "Error: {}", err),
    };
    let _ = stderr.flush();
    CommandResult::failure(err.exit_code())
}
