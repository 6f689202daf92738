//! Library exports for suggest-file-cli.
//!
//! This module exports the CLI structure and the run loop so they can be
//! exercised from tests and benchmarks without spawning the binary.

pub mod cli;
pub mod error;
pub mod utils;

pub use cli::Cli;
