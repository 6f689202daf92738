//! Main entry point for the suggest-file CLI.
//!
//! Prints the files matching each pattern argument, one per line, so the
//! output can be piped into a fuzzy selector. Without arguments the current
//! directory is walked.

mod cli;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use std::io::{self, BufWriter};
use utils::GlobalOptions;

fn main() {
    // Help and version requests are not errors
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let e = CliError::from(e);
            eprintln!("{}: {e}", utils::PROGRAM);
            std::process::exit(e.exit_code());
        }
    };

    let global = GlobalOptions::from(&cli);

    // Initialize logging based on verbosity
    let _installed = suggest_file::init_logger(global.verbose, global.quiet).install();

    let resolver = utils::build_resolver(&global);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();

    let result = utils::run(&resolver, &cli.patterns, &mut out, &mut err);

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_broken_pipe() => std::process::exit(0),
        Err(e) => {
            if !global.quiet || !matches!(e, CliError::Unresolved { .. }) {
                eprintln!("{}: {e}", utils::PROGRAM);
            }
            std::process::exit(e.exit_code());
        }
    }
}
