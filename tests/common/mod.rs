//! Common test utilities for benchbundle integration tests
//!
//! Builds a throwaway monorepo: a git repository with the fixed tool layout
//! the binary expects, where `find_packages` and `browserify` are stub shell
//! scripts. The finder stub emits whatever `packages.txt` contains; the
//! bundler stub concatenates its input files to stdout (and fails when an
//! input contains the `BUNDLE_FAIL` marker).

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Finder stub: emits the package list maintained by the fixture
const FINDER_SCRIPT: &str = r#"#!/bin/sh
cat "$(dirname "$0")/../../packages.txt"
"#;

/// Finder stub variant that fails
const BROKEN_FINDER_SCRIPT: &str = "#!/bin/sh\nexit 1\n";

/// Bundler stub: skips flag arguments, concatenates input files to stdout,
/// fails on the BUNDLE_FAIL marker
const BUNDLER_SCRIPT: &str = r#"#!/bin/sh
for arg in "$@"; do
    case "$arg" in
        -*) ;;
        *)
            if grep -q "BUNDLE_FAIL" "$arg"; then
                exit 1
            fi
            cat "$arg"
            ;;
    esac
done
"#;

/// A fixture monorepo for integration tests
#[allow(dead_code)]
pub struct TestRepo {
    /// Temporary directory (cleans up on drop)
    pub temp: TempDir,
    /// Canonicalized repository root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create the fixture: git repo, source tree, stub tools, empty package
    /// list.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize repo root");

        git2::Repository::init(&root).expect("Failed to init git repository");

        std::fs::create_dir_all(root.join("lib/node_modules"))
            .expect("Failed to create source directory");
        std::fs::create_dir_all(root.join("tools/scripts"))
            .expect("Failed to create tools directory");
        std::fs::create_dir_all(root.join("node_modules/.bin"))
            .expect("Failed to create node_modules/.bin");
        std::fs::create_dir_all(root.join("node_modules/envify"))
            .expect("Failed to create envify stub");
        std::fs::create_dir_all(root.join("node_modules/proxyquireify"))
            .expect("Failed to create proxyquireify stub");

        std::fs::write(root.join("packages.txt"), "").expect("Failed to write package list");
        write_executable(&root.join("tools/scripts/find_packages"), FINDER_SCRIPT);
        write_executable(&root.join("node_modules/.bin/browserify"), BUNDLER_SCRIPT);

        Self { temp, root }
    }

    /// Create a package directory in the source tree and register it with
    /// the finder stub.
    pub fn add_package(&self, name: &str) -> PathBuf {
        let package = self.root.join("lib/node_modules").join(name);
        std::fs::create_dir_all(&package).expect("Failed to create package directory");
        self.register_package(&package);
        package
    }

    /// Register the repository root itself as a package.
    pub fn register_root_package(&self) {
        let root = self.root.clone();
        self.register_package(&root);
    }

    /// Append a package path to the finder stub's output.
    pub fn register_package(&self, package: &Path) {
        let list_path = self.root.join("packages.txt");
        let mut list = std::fs::read_to_string(&list_path).expect("Failed to read package list");
        list.push_str(&format!("{}\n", package.display()));
        std::fs::write(&list_path, list).expect("Failed to write package list");
    }

    /// Write a benchmark file into a package's benchmark directory.
    pub fn add_benchmark(&self, package: &Path, filename: &str, content: &str) {
        let benchmark_dir = package.join("benchmark");
        std::fs::create_dir_all(&benchmark_dir).expect("Failed to create benchmark directory");
        std::fs::write(benchmark_dir.join(filename), content)
            .expect("Failed to write benchmark file");
    }

    /// Replace the finder stub with one that exits non-zero.
    pub fn break_finder(&self) {
        write_executable(
            &self.root.join("tools/scripts/find_packages"),
            BROKEN_FINDER_SCRIPT,
        );
    }

    /// Output directory passed to the binary.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Expected bundle path for a package name.
    pub fn bundle_path(&self, name: &str) -> PathBuf {
        self.output_dir().join(name).join("benchmark_bundle.js")
    }
}

/// Write a script and mark it executable.
#[allow(dead_code)]
pub fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
    }
}
