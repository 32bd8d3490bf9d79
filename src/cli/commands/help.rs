//! Help output.
//!
//! Printed when `ledger` runs without a subcommand.

use std::io::Write;

use crate::cli::registry::Registry;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Writes the full help text of the registry.
pub struct HelpCommand<'a> {
    registry: &'a Registry,
}

impl<'a> HelpCommand<'a> {
    /// Create a new help command.
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }
}

impl Command for HelpCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        out.write_all(self.registry.help().as_bytes())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_registry_help() {
        let registry = Registry::new();
        let mut out = Vec::new();
        let result = HelpCommand::new(&registry).execute(&mut out).unwrap();
        assert!(result.success);
        assert_eq!(String::from_utf8(out).unwrap(), registry.help());
    }

    #[test]
    fn lists_registered_subcommands() {
        let registry = Registry::new();
        let mut out = Vec::new();
        HelpCommand::new(&registry).execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Practical Ledger Framework"));
        assert!(output.contains("completions"));
        assert!(output.contains("Usage:"));
    }
}
