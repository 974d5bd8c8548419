//! Run configuration: repository root and fixed tool locations
//!
//! All paths are resolved once at startup and passed by reference into each
//! stage, so no stage performs ambient filesystem lookups of its own.

use normpath::PathExt;
use std::path::{Path, PathBuf};

use crate::error::{BenchbundleError, Result};

/// Name of the bundle file written into each package's output directory
pub const BUNDLE_FILENAME: &str = "benchmark_bundle.js";

/// Public name of the package rooted at the repository itself
pub const ROOT_PACKAGE_NAME: &str = "@stdlib/stdlib";

/// Resolved locations for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Git repository root (normalized)
    pub repo_root: PathBuf,
    /// Directory containing the monorepo's packages
    pub source_dir: PathBuf,
    /// Package-finder tool
    pub finder: PathBuf,
    /// Bundler executable
    pub bundler: PathBuf,
    /// Environment-variable rewrite transform passed to the bundler
    pub transform: PathBuf,
    /// Stubbing plugin passed to the bundler
    pub plugin: PathBuf,
    /// Destination directory for generated bundles
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration by discovering the git repository enclosing
    /// the current directory.
    pub fn resolve(output_dir: PathBuf) -> Result<Self> {
        let start = std::env::current_dir()?;
        let repo_root =
            find_git_repository_root(&start).ok_or(BenchbundleError::NotInGitRepository)?;
        Ok(Self::from_root(repo_root, output_dir))
    }

    /// Build the configuration from a known repository root.
    ///
    /// All tool locations are fixed positions under the root.
    pub fn from_root(repo_root: PathBuf, output_dir: PathBuf) -> Self {
        let node_modules = repo_root.join("node_modules");
        Self {
            source_dir: repo_root.join("lib").join("node_modules"),
            finder: repo_root
                .join("tools")
                .join("scripts")
                .join("find_packages"),
            bundler: node_modules.join(".bin").join("browserify"),
            transform: node_modules.join("envify"),
            plugin: node_modules.join("proxyquireify").join("plugin"),
            repo_root,
            output_dir,
        }
    }
}

/// Find git repository root from a starting path
pub fn find_git_repository_root(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    // Normalize for symlink handling (macOS /var -> /private); if
    // normalization fails (can happen on Windows with temp paths), use the
    // path as-is
    repo.workdir().map(|p| {
        p.normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or_else(|_| p.to_path_buf())
    })
}
