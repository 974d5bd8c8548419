//! Error types and handling for benchbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for benchbundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum BenchbundleError {
    // Usage errors
    #[error("Must provide an output directory")]
    #[diagnostic(
        code(benchbundle::usage::missing_output_dir),
        help("Usage: benchbundle <output_dir>")
    )]
    MissingOutputDir,

    // Repository errors
    #[error("Not in a git repository")]
    #[diagnostic(
        code(benchbundle::git::not_in_repo),
        help("benchbundle must be run from within the monorepo's git repository")
    )]
    NotInGitRepository,

    // Process errors
    #[error("Failed to run '{command}': {reason}")]
    #[diagnostic(
        code(benchbundle::process::spawn_failed),
        help("Check that the tool exists and is executable")
    )]
    CommandSpawnFailed { command: String, reason: String },

    // Discovery errors
    #[error("Package discovery failed: {reason}")]
    #[diagnostic(
        code(benchbundle::discovery::failed),
        help("Check that tools/scripts/find_packages exists at the repository root")
    )]
    PackageDiscoveryFailed { reason: String },

    // Search errors
    #[error("Benchmark search failed for package '{package}': {reason}")]
    #[diagnostic(code(benchbundle::search::failed))]
    SearchFailed { package: String, reason: String },

    // Bundle errors
    #[error("Failed to bundle benchmarks for package '{package}': {reason}")]
    #[diagnostic(
        code(benchbundle::bundle::failed),
        help("Check that node_modules/.bin/browserify and its plugins are installed")
    )]
    BundleFailed { package: String, reason: String },

    #[error("Failed to write bundle file '{path}': {reason}")]
    #[diagnostic(code(benchbundle::bundle::write_failed))]
    BundleWriteFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(benchbundle::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BenchbundleError {
    fn from(err: std::io::Error) -> Self {
        BenchbundleError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BenchbundleError>;
