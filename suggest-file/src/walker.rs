//! Recursive directory walking.
//!
//! Hidden directories (names starting with `.`) are pruned, except the root
//! itself, but hidden files within visible directories are included. Entries
//! that cannot be read are logged and skipped rather than aborting the walk.

use std::fs::{self, DirEntry};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry as WalkEntry, WalkDir};

use crate::error::{Error, Result};
use crate::path::filter::{is_hidden, is_includable};
use crate::path::normalize;

/// Shared traversal for [`walk`] and [`walk_collect`].
///
/// Calls `emit` for every includable file under `root` in depth-first,
/// file-name order. Stops early only if `emit` fails.
fn walk_filtered<E>(
    root: &Path,
    mut emit: impl FnMut(PathBuf) -> std::result::Result<(), E>,
) -> std::result::Result<(), E> {
    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if is_includable(entry.path(), entry.file_type()) {
            emit(strip_current_dir(root, entry.into_path()))?;
        }
    }

    Ok(())
}

fn is_pruned(entry: &WalkEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && is_hidden(entry.file_name())
}

/// Walking `.` reports `a.txt`, not `./a.txt`.
fn strip_current_dir(root: &Path, path: PathBuf) -> PathBuf {
    if root != Path::new(".") {
        return path;
    }
    match path.strip_prefix(".") {
        Ok(stripped) => stripped.to_path_buf(),
        Err(_) => path,
    }
}

/// Recursively walks `root` and writes every file path to `out`, one per line.
///
/// Directories that cannot be read are reported through the log and
/// skipped.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// let stdout = std::io::stdout();
/// suggest_file::walker::walk(Path::new("."), &mut stdout.lock()).unwrap();
/// ```
pub fn walk<W: Write>(root: &Path, out: &mut W) -> io::Result<()> {
    walk_filtered(root, |path| {
        out.write_all(path.as_os_str().as_encoded_bytes())?;
        out.write_all(b"\n")
    })
}

/// Recursively walks `root` and returns all file paths.
///
/// Same traversal as [`walk`]: hidden directories are skipped, hidden files
/// in visible directories are kept, unreadable entries are logged.
#[must_use]
pub fn walk_collect(root: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    let collected: std::result::Result<(), std::convert::Infallible> =
        walk_filtered(root, |path| {
            results.push(path);
            Ok(())
        });
    match collected {
        Ok(()) => results,
        Err(never) => match never {},
    }
}

/// Lists files directly within `dir` (one level deep, non-recursive).
///
/// Hidden files are included, since naming the directory explicitly asks
/// for everything in it.
///
/// # Errors
///
/// Returns [`Error::DirectoryUnreadable`] if `dir` cannot be listed.
pub fn list_one_level(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = read_dir_sorted(dir).map_err(|source| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut results = Vec::new();
    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let full = normalize::join(dir, entry.file_name());
        if is_includable(&full, file_type) {
            results.push(full);
        }
    }

    Ok(results)
}

/// Reads the direct entries of `dir`, sorted by file name.
///
/// Entries that fail mid-listing are logged and dropped.
pub(crate) fn read_dir_sorted(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<DirEntry> = fs::read_dir(dir)?
        .filter_map(|entry| keep_listed(dir, entry))
        .collect();
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

fn keep_listed(dir: &Path, entry: io::Result<DirEntry>) -> Option<DirEntry> {
    entry
        .map_err(|err| log::warn!("listing {}: {err}", dir.display()))
        .ok()
}
