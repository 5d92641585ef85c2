//! CLI argument definitions using the clap derive API.
//!
//! The demo takes no arguments of its own; only the global flags exist.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "skeleton",
    bin_name = "skeleton",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Starter template demo: adder, value holder and version",
    long_about = "Prints a greeting, the project version, the result of the \
                  widening adder and the value of a value holder before and \
                  after each configured update.",
    after_help = "EXAMPLES:\n\
        \x20 skeleton\n\
        \x20 skeleton -v\n\
        \x20 skeleton --output-format json\n\
        \x20 skeleton --config ./skeleton.toml",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}
