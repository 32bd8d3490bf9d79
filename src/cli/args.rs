//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Command-line interface for the Practical Ledger Framework.
#[derive(Debug, Parser)]
#[command(name = "ledger")]
#[command(version, long_about = None)]
#[command(about = "Command-line interface for the Practical Ledger Framework.")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// Running without one prints the help text.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Name the subcommand is invoked by.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Completions(_) => "completions",
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["ledger"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::parse_from(["ledger", "completions", "bash", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["ledger", "completions", "zsh"]);
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, Shell::Zsh),
            other => panic!("Expected Completions command, got {:?}", other),
        }
    }

    #[test]
    fn command_name_matches_parser() {
        let cli = Cli::parse_from(["ledger", "completions", "fish"]);
        let name = cli.command.as_ref().map(Commands::name);
        assert_eq!(name, Some("completions"));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["ledger", "bogus-command"]).unwrap_err();
        assert!(matches!(
            err.kind(),
            clap::error::ErrorKind::InvalidSubcommand | clap::error::ErrorKind::UnknownArgument
        ));
    }
}
