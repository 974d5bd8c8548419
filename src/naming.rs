//! Package name derivation
//!
//! Maps an absolute package directory to the package's public name: the
//! repository root is the `@stdlib/stdlib` super-package; every other package
//! is named by its path relative to the source directory.

use std::path::Path;

use crate::config::{Config, ROOT_PACKAGE_NAME};

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```
/// use benchbundle::naming::to_forward_slashes;
/// use std::path::Path;
///
/// let path = Path::new("C:\\repo\\lib");
/// assert_eq!(to_forward_slashes(path), "C:/repo/lib");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Derive a package's public name from its directory path.
///
/// The repository root maps to [`ROOT_PACKAGE_NAME`]. Any other path has the
/// source-directory prefix stripped. A path outside the source directory is
/// returned unmodified (the strip is a no-op), matching the finder contract
/// that only emits the root or source-tree packages.
pub fn package_name(config: &Config, package: &Path) -> String {
    if package == config.repo_root {
        return ROOT_PACKAGE_NAME.to_string();
    }
    match package.strip_prefix(&config.source_dir) {
        Ok(relative) => to_forward_slashes(relative),
        Err(_) => to_forward_slashes(package),
    }
}
