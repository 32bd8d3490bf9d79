//! Shell completions generation.
//!
//! The `ledger completions` command generates shell completion scripts.

use std::io::Write;

use crate::cli::args::CompletionsArgs;
use crate::cli::registry::Registry;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand<'a> {
    registry: &'a Registry,
    args: CompletionsArgs,
}

impl<'a> CompletionsCommand<'a> {
    /// Create a new completions command.
    pub fn new(registry: &'a Registry, args: CompletionsArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for CompletionsCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut cmd = self.registry.command().clone();
        let bin_name = self.registry.bin_name().to_string();
        // clap_complete panics on write errors; buffer so they surface as Io.
        let mut script = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, bin_name, &mut script);
        out.write_all(&script)?;
        Ok(CommandResult::success())
    }
}
