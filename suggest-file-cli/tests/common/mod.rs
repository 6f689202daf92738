//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a fixture tree in a temporary directory
//! - Command builder helpers that run the binary inside that tree

use assert_cmd::Command;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated fixture tree.
///
/// The tree is the standard project layout:
/// `proj/{a.txt, b.txt, .git/config, sub/c.txt}`.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with the project tree.
    pub fn new() -> Self {
        let env = Self::empty();
        for file in ["proj/a.txt", "proj/b.txt", "proj/.git/config", "proj/sub/c.txt"] {
            env.create_file(file);
        }
        env
    }

    /// Create a test environment with nothing in it.
    pub fn empty() -> Self {
        let temp_dir = tempfile::Builder::new()
            .prefix("suggest-file-cli-")
            .tempdir()
            .expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without a working directory or
    /// environment overrides.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("suggest-file").expect("Failed to find suggest-file binary")
    }

    /// Get a command builder that runs inside the fixture tree.
    ///
    /// This returns a Command with:
    /// - The working directory set to the temporary directory
    /// - `SUGGEST_FILE_HOME` pointing at the temporary directory
    /// - `SUGGEST_FILE_LOG_MODE` cleared
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .env("SUGGEST_FILE_HOME", &self.temp_path)
            .env_remove("SUGGEST_FILE_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create an empty file, including its parent directories.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        File::create(&path).expect("Failed to create test file");
        path
    }
}

/// Join lines with a trailing newline, the way the binary prints them.
#[allow(dead_code)]
pub fn lines(paths: &[&str]) -> String {
    paths.iter().map(|p| format!("{p}\n")).collect()
}
