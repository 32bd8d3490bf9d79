//! Subcommand registry.
//!
//! The [`Registry`] is built once at startup from the [`Cli`] definition and
//! handed to the dispatcher. It owns the fully built `clap::Command` tree, so
//! parsing, help rendering and completion generation all read the same
//! registered set of subcommands.

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

use super::args::Cli;

/// The registered command surface.
#[derive(Debug, Clone)]
pub struct Registry {
    command: clap::Command,
}

impl Registry {
    /// Build the registry from the [`Cli`] definition.
    pub fn new() -> Self {
        let mut command = Cli::command();
        command.build();
        Self { command }
    }

    /// The underlying clap command tree.
    pub fn command(&self) -> &clap::Command {
        &self.command
    }

    /// Program name used in usage lines and completion scripts.
    pub fn bin_name(&self) -> &str {
        self.command.get_name()
    }

    /// Names of every registered subcommand, in declaration order.
    ///
    /// Includes the `help` subcommand clap adds on build.
    pub fn names(&self) -> Vec<&str> {
        self.command.get_subcommands().map(|c| c.get_name()).collect()
    }

    /// Whether `name` (or one of its aliases) is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.command.find_subcommand(name).is_some()
    }

    /// Full help text, as printed for `--help`.
    pub fn help(&self) -> String {
        self.command.clone().render_long_help().to_string()
    }

    /// Parse an argument vector; `argv[0]` is the program name.
    ///
    /// Help and version requests come back as errors of kind `DisplayHelp` /
    /// `DisplayVersion`, the same way clap reports them.
    pub fn parse<I, T>(&self, argv: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().try_get_matches_from(argv)?;
        Cli::from_arg_matches(&matches)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn registers_completions() {
        let registry = Registry::new();
        assert!(registry.contains("completions"));
        assert!(registry.names().contains(&"completions"));
    }

    #[test]
    fn unknown_names_are_absent() {
        let registry = Registry::new();
        assert!(!registry.contains("bogus-command"));
        assert!(!registry.contains("balance"));
    }

    #[test]
    fn bin_name_is_ledger() {
        assert_eq!(Registry::new().bin_name(), "ledger");
    }

    #[test]
    fn help_names_the_framework() {
        let help = Registry::new().help();
        assert!(help.contains("Practical Ledger Framework"));
        assert!(help.contains("completions"));
    }

    #[test]
    fn help_is_stable() {
        let registry = Registry::new();
        assert_eq!(registry.help(), registry.help());
    }

    #[test]
    fn parse_without_subcommand() {
        let cli = Registry::new().parse(["ledger"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_help_flag_reports_display_help() {
        let err = Registry::new().parse(["ledger", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn parse_version_flag_reports_display_version() {
        let err = Registry::new().parse(["ledger", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.render().to_string().contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn parse_unknown_subcommand_fails() {
        let err = Registry::new().parse(["ledger", "bogus-command"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn registry_can_be_parsed_repeatedly() {
        let registry = Registry::new();
        assert!(registry.parse(["ledger"]).is_ok());
        assert!(registry.parse(["ledger", "completions", "bash"]).is_ok());
        assert!(registry.parse(["ledger"]).is_ok());
    }
}
