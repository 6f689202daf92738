//! Build script for suggest-file-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("suggest-file")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List files matching path, prefix and glob arguments")
        .long_about(
            "List the files matching each PATTERN, one per line, for use as candidates \
             in a fuzzy selector. Without patterns the current directory is walked.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .conflicts_with("quiet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("home")
                .long("home")
                .help("Override the directory that `~` expands to")
                .value_name("PATH")
                .env("SUGGEST_FILE_HOME"),
        )
        .arg(
            Arg::new("patterns")
                .help("Paths, prefixes or glob patterns to resolve")
                .value_name("PATTERN")
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("suggest-file.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
