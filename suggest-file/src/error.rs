//! Error types for the suggest-file library.
//!
//! Resolution fails with one of a small, closed set of errors. Conditions the
//! resolver tolerates (dangling symlinks, unreadable entries in the middle of
//! a walk) never show up here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a suggest-file error.
///
/// # Examples
///
/// ```
/// use suggest_file::{Error, Result};
///
/// fn example_operation() -> Result<Vec<std::path::PathBuf>> {
///     Ok(Vec::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for argument resolution.
///
/// Every variant is terminal for the argument being resolved; callers
/// resolving several arguments are free to carry on with the next one.
#[derive(Debug, Error)]
pub enum Error {
    /// The `~` shorthand was used but no usable home directory is known.
    #[error("cannot expand ~ in {pattern:?}: home directory unavailable")]
    HomeDirectoryUnavailable {
        /// The pattern containing the shorthand.
        pattern: String,
    },

    /// The glob expression could not be compiled.
    #[error("invalid glob {pattern:?}: {source}")]
    InvalidGlobSyntax {
        /// The offending pattern.
        pattern: String,
        /// The underlying parse error.
        #[source]
        source: glob::PatternError,
    },

    /// A directory required for resolution could not be listed.
    #[error("reading directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A metadata query failed for a reason other than "does not exist".
    #[error("stat {}: {source}", path.display())]
    StatFailed {
        /// The path that could not be queried.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Check if the error is a missing home directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use suggest_file::Error;
    ///
    /// let err = Error::HomeDirectoryUnavailable { pattern: "~".to_string() };
    /// assert!(err.is_home_unavailable());
    /// ```
    #[must_use]
    pub fn is_home_unavailable(&self) -> bool {
        matches!(self, Self::HomeDirectoryUnavailable { .. })
    }

    /// Check if the error is a malformed glob.
    #[must_use]
    pub fn is_invalid_glob(&self) -> bool {
        matches!(self, Self::InvalidGlobSyntax { .. })
    }

    /// Check if the error is an unlistable directory.
    #[must_use]
    pub fn is_directory_unreadable(&self) -> bool {
        matches!(self, Self::DirectoryUnreadable { .. })
    }

    /// Check if the error is a failed metadata query.
    #[must_use]
    pub fn is_stat_failed(&self) -> bool {
        matches!(self, Self::StatFailed { .. })
    }

    /// The filesystem path involved in the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::DirectoryUnreadable { path, .. } | Self::StatFailed { path, .. } => Some(path),
            Self::HomeDirectoryUnavailable { .. } | Self::InvalidGlobSyntax { .. } => None,
        }
    }
}
