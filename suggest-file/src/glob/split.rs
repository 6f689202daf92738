//! Splitting a glob pattern into a literal base directory and a glob
//! expression relative to it.

use std::path::{Path, PathBuf};

use crate::path::normalize::{self, SEPARATOR};

/// Characters that make an argument a glob pattern.
pub const METACHARACTERS: [char; 4] = ['*', '?', '[', '{'];

/// Reports whether `s` contains any glob metacharacter.
///
/// `{` counts, so brace alternation alone is enough to trigger globbing.
///
/// # Examples
///
/// ```
/// use suggest_file::glob::contains_meta;
///
/// assert!(contains_meta("**/*.rs"));
/// assert!(contains_meta("{a,b}.txt"));
/// assert!(!contains_meta("src/main.rs"));
/// ```
#[must_use]
pub fn contains_meta(s: &str) -> bool {
    s.contains(&METACHARACTERS[..])
}

/// Splits a pattern into a static base directory and the remaining glob
/// expression.
///
/// The base is the longest prefix of path components that contain no
/// metacharacter. The pattern is cleaned first, so `.`/`..` segments and
/// duplicate separators never reach the glob engine.
///
/// If cleaning removed every metacharacter (`a/*/..` becomes `a`), the parent
/// directory is the base and the final component is matched literally.
///
/// # Examples
///
/// ```
/// use suggest_file::glob::split_pattern;
/// use std::path::PathBuf;
///
/// assert_eq!(split_pattern("src/**/*.rs"), (PathBuf::from("src"), "**/*.rs".to_string()));
/// assert_eq!(split_pattern("/etc/*.conf"), (PathBuf::from("/etc"), "*.conf".to_string()));
/// assert_eq!(split_pattern("*.txt"), (PathBuf::from("."), "*.txt".to_string()));
/// assert_eq!(split_pattern("/*/bin"), (PathBuf::from("/"), "*/bin".to_string()));
/// ```
#[must_use]
pub fn split_pattern(pattern: &str) -> (PathBuf, String) {
    let cleaned = normalize::clean(pattern).to_string_lossy().into_owned();

    let is_absolute = cleaned.starts_with(SEPARATOR);
    let parts: Vec<&str> = cleaned.split(SEPARATOR).collect();

    // The leading separator of an absolute path produces an empty first part.
    let start = usize::from(is_absolute && parts.first() == Some(&""));

    let idx = parts[start..]
        .iter()
        .position(|part| contains_meta(part))
        .map_or(parts.len(), |offset| start + offset);

    if idx == start {
        if is_absolute {
            return (
                PathBuf::from(SEPARATOR.to_string()),
                parts[start..].join(&SEPARATOR.to_string()),
            );
        }
        return (PathBuf::from("."), cleaned);
    }

    if idx == parts.len() {
        let (dir, name) = normalize::split(Path::new(&cleaned));
        return (dir, name.to_string_lossy().into_owned());
    }

    let separator = SEPARATOR.to_string();
    let base = parts[..idx].join(&separator);
    let base = if base.is_empty() { separator.clone() } else { base };

    (PathBuf::from(base), parts[idx..].join(&separator))
}
