//! Per-package bundling pipeline
//!
//! Packages are processed strictly in the finder's order; the first search or
//! bundle failure aborts the remaining run. Bundles already written by
//! earlier packages stay on disk.

use console::Style;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::process::CommandRunner;
use crate::search::FindStrategy;
use crate::{bundler, discovery, naming, search};

/// Discover all packages and bundle each package's benchmarks.
pub fn run(config: &Config, runner: &dyn CommandRunner, strategy: FindStrategy) -> Result<()> {
    let packages = discovery::find_packages(runner, config)?;

    packages
        .iter()
        .try_for_each(|package| process_package(config, runner, strategy, package))?;

    eprintln!("Finished creating benchmark bundles.");
    Ok(())
}

/// Search one package for benchmarks and bundle them if any were found.
fn process_package(
    config: &Config,
    runner: &dyn CommandRunner,
    strategy: FindStrategy,
    package: &Path,
) -> Result<()> {
    eprintln!(
        "{} {}",
        Style::new().bold().apply_to("Package:"),
        package.display()
    );

    let name = naming::package_name(config, package);
    let benchmark_dir = package.join("benchmark");

    let files = match search::find_benchmarks(runner, strategy, &benchmark_dir, &name) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Encountered an error while searching for benchmark files: {}", name);
            return Err(e);
        }
    };

    if files.is_empty() {
        eprintln!("No benchmark files found. Skipping package.");
        eprintln!();
        return Ok(());
    }

    let dest_dir = config.output_dir.join(&name);
    fs::create_dir_all(&dest_dir)?;

    if let Err(e) = bundler::create_bundle(runner, config, &files, &dest_dir, &name) {
        eprintln!("Encountered an error when creating a benchmark bundle: {}", name);
        return Err(e);
    }

    eprintln!();
    Ok(())
}
