//! Argument resolution.
//!
//! This module provides the `Resolver` type, the single entry point that
//! turns one user-supplied argument into a list of files.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::glob::{contains_meta, expand_glob};
use crate::path::normalize;
use crate::prefix::expand_prefix;
use crate::walker::{list_one_level, walk_collect};

/// The resolution rule that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The argument contained glob metacharacters.
    Glob,
    /// The argument ended with a separator: one directory level was listed.
    ListDirectory,
    /// The argument named an existing directory, walked recursively.
    Walk,
    /// The argument named an existing regular file.
    File,
    /// Nothing existed under the name; its last component was a prefix.
    Prefix,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob => write!(f, "glob"),
            Self::ListDirectory => write!(f, "list-directory"),
            Self::Walk => write!(f, "walk"),
            Self::File => write!(f, "file"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

/// The files an argument resolved to, with the rule that found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Which rule handled the argument.
    pub strategy: Strategy,
    /// Matching files, in traversal order.
    pub paths: Vec<PathBuf>,
}

/// Resolves arguments according to the precedence rules.
///
/// For each argument, the first matching rule wins:
/// 1. Expand a leading `~` to the home directory.
/// 2. Contains a glob metacharacter (`*`, `?`, `[`, `{`): glob expansion.
/// 3. Ends with a separator: list files directly inside that directory.
/// 4. Names an existing directory: walk it recursively. Names an existing
///    regular file: return it.
/// 5. Otherwise: prefix match on the final component.
///
/// The resolver never reads the environment. The home directory is
/// supplied with [`Resolver::with_home_dir`]; without one, arguments using
/// `~` fail with [`Error::HomeDirectoryUnavailable`].
///
/// # Examples
///
/// ```no_run
/// use suggest_file::Resolver;
/// use std::path::PathBuf;
///
/// let resolver = Resolver::new().with_home_dir(Some(PathBuf::from("/home/u")));
///
/// for path in resolver.resolve("~/Downloads").unwrap() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    home_dir: Option<PathBuf>,
}

impl Resolver {
    /// Create a resolver without a home directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use suggest_file::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// assert!(resolver.home_dir().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the directory `~` expands to.
    ///
    /// # Examples
    ///
    /// ```
    /// use suggest_file::Resolver;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolver = Resolver::new().with_home_dir(Some(PathBuf::from("/home/u")));
    /// assert_eq!(resolver.home_dir(), Some(Path::new("/home/u")));
    /// ```
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// The configured home directory, if any.
    #[must_use]
    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Resolve an argument to the files it denotes.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `~` is used without a home directory (`HomeDirectoryUnavailable`)
    /// - the glob is malformed (`InvalidGlobSyntax`)
    /// - a directory that has to be listed cannot be (`DirectoryUnreadable`)
    /// - the path cannot be queried for a reason other than not existing
    ///   (`StatFailed`)
    pub fn resolve(&self, argument: &str) -> Result<Vec<PathBuf>> {
        self.resolve_detailed(argument).map(|resolution| resolution.paths)
    }

    /// Resolve an argument, also reporting which rule handled it.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use suggest_file::{Resolver, Strategy};
    ///
    /// let resolution = Resolver::new().resolve_detailed("src/").unwrap();
    /// assert_eq!(resolution.strategy, Strategy::ListDirectory);
    /// ```
    pub fn resolve_detailed(&self, argument: &str) -> Result<Resolution> {
        let expanded = normalize::expand_tilde(argument, self.home_dir())?;

        // Cleaning strips the trailing separator, so check it first.
        let trailing_separator = normalize::has_trailing_separator(&expanded);

        if contains_meta(&expanded) {
            return Self::finish(argument, Strategy::Glob, expand_glob(&expanded)?);
        }

        let cleaned = normalize::clean(&expanded);

        if trailing_separator {
            return Self::finish(argument, Strategy::ListDirectory, list_one_level(&cleaned)?);
        }

        match fs::metadata(&cleaned) {
            Ok(meta) if meta.is_dir() => {
                let paths = walk_collect(&cleaned);
                return Self::finish(argument, Strategy::Walk, paths);
            }
            Ok(meta) if meta.is_file() => {
                return Self::finish(argument, Strategy::File, vec![cleaned]);
            }
            // Special files fall through to prefix matching.
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::StatFailed {
                    path: cleaned,
                    source,
                });
            }
        }

        Self::finish(argument, Strategy::Prefix, expand_prefix(&cleaned)?)
    }

    fn finish(argument: &str, strategy: Strategy, paths: Vec<PathBuf>) -> Result<Resolution> {
        log::debug!(
            "resolved {argument:?} by {strategy}: {} file(s)",
            paths.len()
        );
        Ok(Resolution { strategy, paths })
    }
}
