//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// benchbundle - browser benchmark bundler
///
/// Discover packages containing benchmark files and bundle each package's
/// benchmarks into a single browser-runnable script.
#[derive(Parser, Debug)]
#[command(
    name = "benchbundle",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle package benchmarks for the browser",
    long_about = "benchbundle walks every package in the monorepo, searches its benchmark \
                  directory for benchmark*.js files, and runs browserify (with the envify \
                  transform and the proxyquireify plugin) to produce one benchmark_bundle.js \
                  per package under the output directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  benchbundle ./build/benchmarks\n    \
                  benchbundle /tmp/bundles\n\n\
                  \x1b[1m\x1b[32mExit codes:\x1b[0m\n    \
                  0  all packages bundled (or skipped)\n    \
                  1  missing output directory, or a discovery/search/bundle failure"
)]
pub struct Cli {
    /// Output directory for the generated bundles
    // Optional at the parser level: a missing value must exit 1, not clap's 2.
    pub output_dir: Option<PathBuf>,
}
