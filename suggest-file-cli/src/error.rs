//! CLI-specific error types with exit codes.
//!
//! Per-pattern resolution failures are reported as they happen and only
//! summarized here; the remaining variants abort the run.

use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// One or more patterns failed to resolve.
    Unresolved {
        /// Number of patterns that failed.
        failed: usize,
        /// Number of patterns given.
        total: usize,
    },

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error writing results.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: At least one pattern failed to resolve
    /// - 4: Invalid arguments
    /// - 5: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unresolved { .. } => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }

    /// Whether the error is a closed output pipe.
    ///
    /// Selectors commonly exit before reading everything; that is a normal
    /// way for a run to end.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Unresolved { failed, total } => {
                write!(f, "{failed} of {total} pattern(s) failed to resolve")
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::InvalidArguments(e.to_string().trim_end().to_string())
    }
}
