//! Path normalization functions.
//!
//! This module provides the purely lexical path handling the resolver needs:
//! - Expanding a leading tilde (~) to a caller-supplied home directory
//! - Cleaning `.`/`..` components and duplicate separators
//! - Detecting the trailing separator that marks "list this directory"
//! - Splitting and joining paths without introducing a `./` prefix
//!
//! Nothing here touches the filesystem.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// The path separator assumed by pattern handling.
pub const SEPARATOR: char = '/';

/// Expand a leading tilde (~) to the home directory.
///
/// Handles `~` and `~/rest`; `~user` syntax is not supported and such
/// patterns are returned unchanged, as is anything not starting with `~`.
/// A trailing separator in `pattern` survives expansion.
///
/// # Errors
///
/// Returns [`Error::HomeDirectoryUnavailable`] if the pattern needs the home
/// directory and `home` is `None` or not valid UTF-8.
///
/// # Examples
///
/// ```
/// use suggest_file::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let home = Some(Path::new("/home/u"));
/// assert_eq!(expand_tilde("~", home).unwrap(), "/home/u");
/// assert_eq!(expand_tilde("~/docs/", home).unwrap(), "/home/u/docs/");
/// assert_eq!(expand_tilde("~bob/docs", home).unwrap(), "~bob/docs");
/// assert!(expand_tilde("~", None).is_err());
/// ```
pub fn expand_tilde(pattern: &str, home: Option<&Path>) -> Result<String> {
    let Some(rest) = pattern.strip_prefix('~') else {
        return Ok(pattern.to_string());
    };
    if !rest.is_empty() && !rest.starts_with(SEPARATOR) {
        return Ok(pattern.to_string());
    }

    let home = home
        .and_then(Path::to_str)
        .ok_or_else(|| Error::HomeDirectoryUnavailable {
            pattern: pattern.to_string(),
        })?;

    let mut expanded = String::with_capacity(home.len() + rest.len());
    expanded.push_str(home);
    expanded.push_str(rest);
    Ok(expanded)
}

/// Reports whether a pattern ends with a path separator.
///
/// Must be checked before [`clean`], which strips trailing separators.
#[must_use]
pub fn has_trailing_separator(pattern: &str) -> bool {
    pattern.ends_with(SEPARATOR) || pattern.ends_with(std::path::MAIN_SEPARATOR)
}

/// Lexically clean a path.
///
/// Resolves `.` and `..` components and collapses repeated separators
/// without consulting the filesystem. Leading `..` components of relative
/// paths are kept, `..` above the root is dropped, and an empty result
/// becomes `.`.
///
/// # Examples
///
/// ```
/// use suggest_file::path::normalize::clean;
/// use std::path::PathBuf;
///
/// assert_eq!(clean("a/./b//c/../d/"), PathBuf::from("a/b/d"));
/// assert_eq!(clean("../x/.."), PathBuf::from(".."));
/// assert_eq!(clean("/../etc"), PathBuf::from("/etc"));
/// assert_eq!(clean(""), PathBuf::from("."));
/// ```
pub fn clean(path: impl AsRef<Path>) -> PathBuf {
    let cleaned = path.as_ref().clean();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Split a cleaned path into its parent directory and final component.
///
/// A path without a parent yields `.` as its directory, and the root yields
/// itself for both parts.
///
/// # Examples
///
/// ```
/// use suggest_file::path::normalize::split;
/// use std::ffi::OsStr;
/// use std::path::Path;
///
/// assert_eq!(split(Path::new("src/ma")), (Path::new("src").to_path_buf(), OsStr::new("ma").to_os_string()));
/// assert_eq!(split(Path::new("pro")), (Path::new(".").to_path_buf(), OsStr::new("pro").to_os_string()));
/// ```
#[must_use]
pub fn split(path: &Path) -> (PathBuf, OsString) {
    let base = match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_os_string(),
        Some(other) => other.as_os_str().to_os_string(),
        None => OsString::from("."),
    };

    let dir = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    };

    (dir, base)
}

/// Join a name onto a directory, treating `.` as "no directory".
///
/// Keeps paths found under the current directory free of a `./` prefix.
#[must_use]
pub fn join(dir: &Path, name: impl AsRef<OsStr>) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name.as_ref())
    } else {
        dir.join(name.as_ref())
    }
}
