//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for throw-away directory trees
//! and helpers for comparing resolved paths.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .file("proj/a.txt")
///     .dir("proj/empty")
///     .build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct TreeFixture {
    files: Vec<String>,
    dirs: Vec<String>,
    symlinks: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard project tree:
    /// `proj/{a.txt, b.txt, .git/config, sub/c.txt}`.
    pub fn project() -> Self {
        Self::new()
            .file("proj/a.txt")
            .file("proj/b.txt")
            .file("proj/.git/config")
            .file("proj/sub/c.txt")
    }

    /// Adds an empty regular file, creating parent directories.
    pub fn file(mut self, path: &str) -> Self {
        self.files.push(path.to_string());
        self
    }

    /// Adds an empty directory.
    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.push(path.to_string());
        self
    }

    /// Adds a symlink at `link` pointing to `target` (relative to the root).
    pub fn symlink(mut self, link: &str, target: &str) -> Self {
        self.symlinks.push((link.to_string(), target.to_string()));
        self
    }

    /// Creates the tree under a fresh temporary directory.
    pub fn build(self) -> Tree {
        let temp_dir = tempfile::Builder::new()
            .prefix("suggest-file-")
            .tempdir()
            .expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir)).expect("Failed to create directory");
        }
        for file in &self.files {
            let path = root.join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            File::create(&path).expect("Failed to create file");
        }
        #[cfg(unix)]
        for (link, target) in &self.symlinks {
            std::os::unix::fs::symlink(root.join(target), root.join(link))
                .expect("Failed to create symlink");
        }

        Tree { temp_dir, root }
    }
}

/// A materialized fixture tree, removed when dropped.
pub struct Tree {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the tree.
    pub root: PathBuf,
}

#[allow(dead_code)]
impl Tree {
    /// An argument string for `rest` under the tree root.
    pub fn arg(&self, rest: &str) -> String {
        format!("{}/{rest}", self.root.display())
    }

    /// Resolved paths made relative to the tree root.
    pub fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        relative_to(&self.root, paths)
    }
}

/// Strips `root` from every path and renders the rest as strings.
#[allow(dead_code)]
pub fn relative_to(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .expect("Resolved path outside the fixture")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
