//! Optional flags of the demo.
//!
//! `skeleton` needs none of them; they only tune how loud the run is and how
//! the report is rendered.

use std::{ffi::OsStr, path::PathBuf};

use clap::{ArgAction, Args, ValueEnum};

/// Flags shared by every invocation of the demo.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of the demo run: `-v` info, `-vv` each holder update, `-vvv`
    /// every holder access.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run the demo without printing the report; errors still reach stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the report and logs without ANSI colours.
    ///
    /// Also switched on by a non-empty `NO_COLOR` environment variable, see
    /// [`GlobalArgs::honour_no_color`].
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML file with the greeting, adder operands and holder values.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How the demo report is rendered.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Fold the `NO_COLOR` environment value into `--no-color`.
    ///
    /// Any non-empty value disables colour (<https://no-color.org>); an unset
    /// or empty variable leaves the flag as parsed.
    pub fn honour_no_color(&mut self, env_value: Option<&OsStr>) {
        if env_value.is_some_and(|v| !v.is_empty()) {
            self.no_color = true;
        }
    }
}

/// Rendering of the demo report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured lines.
    Human,
    /// Uncoloured lines.
    Plain,
    /// The whole report as one JSON document.
    Json,
}
