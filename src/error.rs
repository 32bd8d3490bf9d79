//! Error types for ledger operations.
//!
//! This module defines [`LedgerError`], the error type returned by the
//! command dispatcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed command lines become [`LedgerError::Usage`] and exit with 2
//! - Failures writing output become [`LedgerError::Io`] and exit with 1

use thiserror::Error;

/// Exit code for malformed or unrecognized command-line input.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Exit code for output failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Unknown subcommand, unknown flag or otherwise unparseable arguments.
    ///
    /// `message` is the parser's rendered report, usage line included.
    #[error("{message}")]
    Usage { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LedgerError::Usage { .. } => USAGE_EXIT_CODE,
            LedgerError::Io(_) => FAILURE_EXIT_CODE,
        }
    }
}

impl From<clap::Error> for LedgerError {
    fn from(err: clap::Error) -> Self {
        LedgerError::Usage {
            message: err.render().to_string(),
        }
    }
}

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
