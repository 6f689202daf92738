//! Prefix matching for arguments that name nothing on disk.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::filter::{is_includable, resolves_to_dir};
use crate::path::normalize;
use crate::walker::{read_dir_sorted, walk_collect};

/// Treats the final component of `path` as a prefix and expands it.
///
/// Every entry of the parent directory whose name starts with the prefix is
/// considered: directories (including symlinks to directories) are walked
/// recursively, includable files are returned as they are. Hidden entries
/// are eligible like any other; dangling symlinks are skipped.
///
/// `path` is expected to be cleaned already.
///
/// # Errors
///
/// Returns [`Error::DirectoryUnreadable`] if the parent directory cannot be
/// listed.
///
/// # Examples
///
/// ```no_run
/// use suggest_file::prefix::expand_prefix;
/// use std::path::Path;
///
/// // Everything under ~/Downloads, ~/Documents, ...
/// let files = expand_prefix(Path::new("/home/u/Do")).unwrap();
/// ```
pub fn expand_prefix(path: &Path) -> Result<Vec<PathBuf>> {
    let (dir, prefix) = normalize::split(path);
    let prefix = prefix.as_encoded_bytes();

    let entries = read_dir_sorted(&dir).map_err(|source| Error::DirectoryUnreadable {
        path: dir.clone(),
        source,
    })?;

    let mut results = Vec::new();

    for entry in entries {
        let name = entry.file_name();
        if !name.as_encoded_bytes().starts_with(prefix) {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let full = normalize::join(&dir, &name);

        match resolves_to_dir(&full, file_type) {
            None => log::debug!("prefix: skipping dangling symlink {}", full.display()),
            Some(true) => results.extend(walk_collect(&full)),
            Some(false) => {
                if is_includable(&full, file_type) {
                    results.push(full);
                }
            }
        }
    }

    Ok(results)
}
