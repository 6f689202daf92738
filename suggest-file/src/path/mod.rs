//! Lexical path handling and entry filtering.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Arguments are cleaned lexically (`.`/`..` resolved, separators collapsed)
//! after tilde expansion. Cleaning strips trailing separators, so callers
//! that care about a trailing `/` must check for it first with
//! [`normalize::has_trailing_separator`].
//!
//! ## Includability
//!
//! A path is *includable* when it is a regular file or a symlink chain that
//! ends at one. Directories, special files and dangling symlinks never
//! appear in results. See [`filter::is_includable`].
//!
//! ## Hidden entries
//!
//! An entry is hidden when its name starts with `.`. Each resolution rule
//! decides for itself whether hidden entries take part.
//!
//! # Examples
//!
//! ```
//! use suggest_file::path::normalize::{clean, expand_tilde, has_trailing_separator};
//! use std::path::{Path, PathBuf};
//!
//! let expanded = expand_tilde("~/Downloads/", Some(Path::new("/home/u"))).unwrap();
//! assert!(has_trailing_separator(&expanded));
//! assert_eq!(clean(&expanded), PathBuf::from("/home/u/Downloads"));
//! ```

pub mod filter;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use filter::{is_hidden, is_includable};
