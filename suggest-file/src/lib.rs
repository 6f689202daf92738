#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # suggest-file
//!
//! A library for resolving path-like arguments into lists of files.
//!
//! An argument can be a directory, a file, a directory with a trailing
//! separator, a prefix of existing names, or a glob pattern, optionally
//! starting with `~`. The result is the set of regular files it denotes,
//! ready to be fed to a fuzzy selector.
//!
//! ## Core Types
//!
//! - [`Resolver`]: applies the resolution precedence to one argument
//! - [`Strategy`] and [`Resolution`]: which rule produced a result
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: a stderr backend for the `log` facade
//!
//! ## Building Blocks
//!
//! - [`walker`]: recursive and one-level directory listing
//! - [`glob`]: base/expression splitting and glob evaluation
//! - [`prefix`]: prefix matching against sibling entries
//! - [`path`]: tilde expansion, lexical cleaning and entry filtering
//!
//! ## Examples
//!
//! ```no_run
//! use suggest_file::Resolver;
//!
//! let resolver = Resolver::new().with_home_dir(Some("/home/u".into()));
//!
//! // Rust sources anywhere below src/
//! let sources = resolver.resolve("src/**/*.rs").unwrap();
//!
//! // Files directly inside ~/.config, hidden ones included
//! let config = resolver.resolve("~/.config/").unwrap();
//! ```

pub mod error;
pub mod glob;
pub mod logging;
pub mod path;
pub mod prefix;
pub mod resolver;
pub mod walker;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolver::{Resolution, Resolver, Strategy};
