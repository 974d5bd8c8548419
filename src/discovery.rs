//! Package discovery via the external finder tool

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{BenchbundleError, Result};
use crate::process::CommandRunner;

/// Run the package finder and return the discovered package directories.
///
/// The finder emits one absolute package path per stdout line; order is
/// preserved. A non-zero finder exit aborts the run.
pub fn find_packages(runner: &dyn CommandRunner, config: &Config) -> Result<Vec<PathBuf>> {
    let output = runner.run(&config.finder, &[])?;
    if !output.success {
        return Err(BenchbundleError::PackageDiscoveryFailed {
            reason: output.status_label(),
        });
    }

    Ok(output
        .stdout_text()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect())
}
