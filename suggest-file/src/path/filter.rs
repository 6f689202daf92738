//! Entry filtering shared by the walker, glob matcher and prefix matcher.
//!
//! Every component that emits a path runs it through [`is_includable`], so
//! symlink handling is identical no matter which resolution rule produced
//! the candidate.

use std::ffi::OsStr;
use std::fs::{self, FileType};
use std::path::Path;

/// Reports whether `path` should be included in results.
///
/// `file_type` is the type of the entry itself, as returned by a directory
/// listing or `symlink_metadata`. Symlinks are followed: they are includable
/// only if the chain ends at a regular file. Dangling symlinks, directories,
/// and special files (pipes, sockets, devices) are rejected.
///
/// # Examples
///
/// ```no_run
/// use suggest_file::path::filter::is_includable;
/// use std::fs;
/// use std::path::Path;
///
/// let path = Path::new("Cargo.toml");
/// let file_type = fs::symlink_metadata(path).unwrap().file_type();
/// assert!(is_includable(path, file_type));
/// ```
#[must_use]
pub fn is_includable(path: &Path, file_type: FileType) -> bool {
    if file_type.is_symlink() {
        return fs::metadata(path).is_ok_and(|target| target.is_file());
    }
    file_type.is_file()
}

/// Reports whether an entry should be treated as a directory.
///
/// Symlinks are followed to their final target. Returns `None` for a
/// dangling symlink so callers can skip it outright.
#[must_use]
pub fn resolves_to_dir(path: &Path, file_type: FileType) -> Option<bool> {
    if file_type.is_symlink() {
        return fs::metadata(path).ok().map(|target| target.is_dir());
    }
    Some(file_type.is_dir())
}

/// Reports whether a file name denotes a hidden entry.
///
/// # Examples
///
/// ```
/// use suggest_file::path::filter::is_hidden;
/// use std::ffi::OsStr;
///
/// assert!(is_hidden(OsStr::new(".git")));
/// assert!(!is_hidden(OsStr::new("src")));
/// ```
#[must_use]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
