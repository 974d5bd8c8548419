//! Benchmark file search
//!
//! Recursive search for `benchmark*.js` files, delegated to the system `find`
//! utility. BSD and GNU `find` spell extended-regex matching differently, so
//! the invocation style is picked once at startup from the OS family and
//! injected into the search.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{BenchbundleError, Result};
use crate::process::CommandRunner;

/// Path regex matching benchmark files anywhere under the search root
const BENCHMARK_REGEX: &str = r".*/benchmark[^/]*\.js";

/// How to invoke `find` for extended-regex matching on this platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindStrategy {
    /// BSD-style `find -E` (macOS and the BSDs)
    ExtendedRegex,
    /// GNU-style `find -regextype posix-extended`
    PosixExtended,
}

impl FindStrategy {
    /// Select the invocation style for the running OS
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    fn for_os(os: &str) -> Self {
        match os {
            "macos" | "ios" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => {
                Self::ExtendedRegex
            }
            _ => Self::PosixExtended,
        }
    }

    /// Arguments for a recursive benchmark-file search rooted at `root`
    pub fn args(self, root: &Path) -> Vec<OsString> {
        match self {
            Self::ExtendedRegex => vec![
                OsString::from("-E"),
                root.as_os_str().to_os_string(),
                OsString::from("-type"),
                OsString::from("f"),
                OsString::from("-regex"),
                OsString::from(BENCHMARK_REGEX),
            ],
            Self::PosixExtended => vec![
                root.as_os_str().to_os_string(),
                OsString::from("-regextype"),
                OsString::from("posix-extended"),
                OsString::from("-type"),
                OsString::from("f"),
                OsString::from("-regex"),
                OsString::from(BENCHMARK_REGEX),
            ],
        }
    }
}

/// Search `root` recursively for benchmark files belonging to `package`.
///
/// Returns matches in the search tool's output order. A missing `root` (a
/// package without a benchmark directory) and zero matches are both success
/// with an empty list; a failing `find` invocation is an error attributed to
/// `package`.
pub fn find_benchmarks(
    runner: &dyn CommandRunner,
    strategy: FindStrategy,
    root: &Path,
    package: &str,
) -> Result<Vec<PathBuf>> {
    eprintln!("Searching for benchmark files...");

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let output = runner.run(Path::new("find"), &strategy.args(root))?;
    if !output.success {
        return Err(BenchbundleError::SearchFailed {
            package: package.to_string(),
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
