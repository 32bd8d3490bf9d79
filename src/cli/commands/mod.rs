//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes each
//! [`Commands`](crate::cli::Commands) variant to its implementation. An
//! invocation without a subcommand is routed to [`help::HelpCommand`].

pub mod completions;
pub mod dispatcher;
pub mod help;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
