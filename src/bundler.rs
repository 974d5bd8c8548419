//! Bundle creation via the external bundler

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BUNDLE_FILENAME, Config};
use crate::error::{BenchbundleError, Result};
use crate::process::CommandRunner;

/// Bundler arguments for `files`: the transform flag, the plugin flag, then
/// every input file in order.
fn bundler_args(config: &Config, files: &[PathBuf]) -> Vec<OsString> {
    let mut args = Vec::with_capacity(files.len() + 2);

    let mut transform = OsString::from("-t=");
    transform.push(config.transform.as_os_str());
    args.push(transform);

    let mut plugin = OsString::from("-p=");
    plugin.push(config.plugin.as_os_str());
    args.push(plugin);

    args.extend(files.iter().map(|f| f.as_os_str().to_os_string()));
    args
}

/// Bundle `files` into `<dest_dir>/benchmark_bundle.js`.
///
/// Runs the bundler, captures its stdout, and writes it to the bundle file,
/// overwriting any previous bundle. The bundler's exit status is the only
/// validation; content is not inspected. Failures are attributed to
/// `package`.
pub fn create_bundle(
    runner: &dyn CommandRunner,
    config: &Config,
    files: &[PathBuf],
    dest_dir: &Path,
    package: &str,
) -> Result<()> {
    let output = runner.run(&config.bundler, &bundler_args(config, files))?;
    if !output.success {
        return Err(BenchbundleError::BundleFailed {
            package: package.to_string(),
            reason: output.status_label(),
        });
    }

    let bundle_path = dest_dir.join(BUNDLE_FILENAME);
    fs::write(&bundle_path, &output.stdout).map_err(|e| BenchbundleError::BundleWriteFailed {
        path: bundle_path.display().to_string(),
        reason: e.to_string(),
    })
}
