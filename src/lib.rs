//! Ledger - Command-line interface for the Practical Ledger Framework.
//!
//! This crate currently provides the command-dispatch shell: argument
//! parsing, subcommand routing and help output. Ledger operations will be
//! registered as further [`cli::Commands`] variants.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, subcommand registry and dispatch
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use ledger::cli::{run, Registry};
//!
//! let registry = Registry::new();
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//!
//! let code = run(&registry, ["ledger"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Practical Ledger Framework"));
//! ```

pub mod cli;
pub mod error;

pub use error::{LedgerError, Result};
