//! benchbundle - browser benchmark bundler
//!
//! Discovers packages containing benchmark files within the monorepo and
//! bundles each package's benchmarks into a single browser-runnable script
//! via browserify.

use clap::Parser;
use console::Style;
use std::path::PathBuf;

mod bundler;
mod cli;
mod config;
mod discovery;
mod error;
mod naming;
mod pipeline;
mod process;
mod search;

use cli::Cli;
use config::Config;
use error::{BenchbundleError, Result};
use process::SystemRunner;
use search::FindStrategy;

/// Validate the output directory argument: present and non-empty.
fn validate_output_dir(output_dir: Option<PathBuf>) -> Result<PathBuf> {
    match output_dir {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(BenchbundleError::MissingOutputDir),
    }
}

fn run(output_dir: PathBuf) -> Result<()> {
    let config = Config::resolve(output_dir)?;
    let strategy = FindStrategy::detect();
    let runner = SystemRunner;

    pipeline::run(&config, &runner, strategy)
}

/// Final-stage cleanup. Nothing is held (no handles, locks, or background
/// processes); emits the closing blank line on both exit paths.
fn cleanup() {
    eprintln!();
}

fn main() {
    let cli = Cli::parse();

    // Usage errors exit before any other work; cleanup never runs for them.
    let output_dir = match validate_output_dir(cli.output_dir) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match run(output_dir) {
        Ok(()) => {
            eprintln!("{}", Style::new().bold().green().apply_to("Success!"));
            cleanup();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            cleanup();
            std::process::exit(1);
        }
    }
}
