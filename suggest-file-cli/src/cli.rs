//! CLI structure and argument definitions.
//!
//! This module defines the command line using clap's derive macros. There
//! are no subcommands: every positional argument is a pattern to resolve.

use clap::Parser;
use std::path::PathBuf;

/// Lists the files denoted by path, prefix and glob arguments.
#[derive(Parser, Debug)]
#[command(name = "suggest-file")]
#[command(
    version,
    about = "List files matching path, prefix and glob arguments",
    long_about = "List the files matching each PATTERN, one per line, for use as \
                  candidates in a fuzzy selector.\n\n\
                  A PATTERN may name a directory (walked recursively, hidden \
                  directories skipped), a directory with a trailing '/' (its files \
                  listed one level deep), a file, a glob such as 'src/**/*.rs', or \
                  the prefix of existing names. A leading '~' expands to the home \
                  directory. Without patterns the current directory is walked."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Override the directory that `~` expands to
    #[arg(long, value_name = "PATH", env = "SUGGEST_FILE_HOME")]
    pub home: Option<PathBuf>,

    /// Paths, prefixes or glob patterns to resolve
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}
