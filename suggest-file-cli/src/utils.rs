//! Utility functions for CLI operations.
//!
//! This module turns parsed options into a configured [`Resolver`] and
//! drives it over the requested patterns, writing matches and diagnostics
//! to the given streams.

use crate::cli::Cli;
use crate::error::CliError;
use std::io::Write;
use std::path::{Path, PathBuf};
use suggest_file::{walker, Resolver};

/// Program name used to prefix diagnostics.
pub const PROGRAM: &str = "suggest-file";

/// Global CLI options.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the home directory.
    pub home: Option<PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            home: cli.home.clone(),
        }
    }
}

/// Build a resolver, falling back to the user's home directory.
pub fn build_resolver(global: &GlobalOptions) -> Resolver {
    let home = global.home.clone().or_else(home::home_dir);
    if home.is_none() {
        log::debug!("no home directory available; '~' patterns will fail");
    }
    Resolver::new().with_home_dir(home)
}

/// Resolve every pattern, writing matches to `out` and diagnostics to `err`.
///
/// Without patterns the current directory is walked. A pattern that fails
/// does not stop the others; the failures are counted and reported as
/// [`CliError::Unresolved`] once all patterns have been tried.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails, or [`CliError::Unresolved`]
/// if any pattern failed to resolve.
pub fn run<O: Write, E: Write>(
    resolver: &Resolver,
    patterns: &[String],
    out: &mut O,
    err: &mut E,
) -> Result<(), CliError> {
    if patterns.is_empty() {
        walker::walk(Path::new("."), out)?;
        out.flush()?;
        return Ok(());
    }

    let mut failed = 0;
    for pattern in patterns {
        match resolver.resolve(pattern) {
            Ok(paths) if paths.is_empty() => {
                writeln!(err, "{PROGRAM}: {pattern}: no matches")?;
            }
            Ok(paths) => {
                for path in &paths {
                    out.write_all(path.as_os_str().as_encoded_bytes())?;
                    out.write_all(b"\n")?;
                }
            }
            Err(e) => {
                failed += 1;
                writeln!(err, "{PROGRAM}: {pattern}: {e}")?;
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        return Err(CliError::Unresolved {
            failed,
            total: patterns.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for file in [
            "proj/a.txt",
            "proj/b.txt",
            "proj/.git/config",
            "proj/sub/c.txt",
        ] {
            let path = tmp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(path).unwrap();
        }
        tmp
    }

    fn run_patterns(
        resolver: &Resolver,
        patterns: &[String],
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(resolver, patterns, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_matches_are_printed_one_per_line() {
        let tmp = project();
        let root = tmp.path().display();
        let patterns = vec![format!("{root}/proj/")];

        let (result, out, err) = run_patterns(&Resolver::new(), &patterns);

        assert!(result.is_ok());
        assert_eq!(out, format!("{root}/proj/a.txt\n{root}/proj/b.txt\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_empty_result_is_reported_but_not_an_error() {
        let tmp = project();
        let pattern = format!("{}/proj/*.md", tmp.path().display());

        let (result, out, err) = run_patterns(&Resolver::new(), &[pattern.clone()]);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(err, format!("suggest-file: {pattern}: no matches\n"));
    }

    #[test]
    fn test_failures_do_not_stop_later_patterns() {
        let tmp = project();
        let root = tmp.path().display();
        let patterns = vec![
            format!("{root}/[bad"),
            "~".to_string(),
            format!("{root}/proj/a.txt"),
        ];

        let (result, out, err) = run_patterns(&Resolver::new(), &patterns);

        match result {
            Err(CliError::Unresolved { failed, total }) => {
                assert_eq!((failed, total), (2, 3));
            }
            other => panic!("expected Unresolved, got {other:?}"),
        }
        assert_eq!(out, format!("{root}/proj/a.txt\n"));
        assert_eq!(err.lines().count(), 2);
        assert!(err.lines().all(|line| line.starts_with("suggest-file: ")));
    }

    #[test]
    fn test_home_override() {
        let tmp = project();
        let global = GlobalOptions {
            verbose: false,
            quiet: false,
            home: Some(tmp.path().join("proj")),
        };
        let resolver = build_resolver(&global);

        let (result, out, _) = run_patterns(&resolver, &["~/sub".to_string()]);

        assert!(result.is_ok());
        assert_eq!(out, format!("{}/proj/sub/c.txt\n", tmp.path().display()));
    }
}
