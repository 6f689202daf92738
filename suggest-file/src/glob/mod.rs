//! Glob pattern support.
//!
//! A pattern is split into a literal base directory and a glob expression
//! ([`split_pattern`]), then the expression is evaluated against the
//! filesystem under that base ([`expand_glob`]).
//!
//! # Examples
//!
//! ```
//! use suggest_file::glob::{contains_meta, split_pattern};
//! use std::path::PathBuf;
//!
//! let pattern = "~/notes/**/*.md".replacen('~', "/home/u", 1);
//! assert!(contains_meta(&pattern));
//! assert_eq!(
//!     split_pattern(&pattern),
//!     (PathBuf::from("/home/u/notes"), "**/*.md".to_string())
//! );
//! ```

mod braces;
pub mod matcher;
pub mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use matcher::expand_glob;
pub use split::{contains_meta, split_pattern, METACHARACTERS};
