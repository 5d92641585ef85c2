//! # Skeleton CLI
//!
//! Demonstration entry point of the starter template.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit)
//!    and fold `NO_COLOR` into `--no-color`.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Run the demo and render its report.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | Invalid arguments       |
//! |  4   | Configuration error     |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, instrument};

use skeleton_adapters::StringValueHolder;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod demo;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version also arrive here and go to stdout.
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    cli.global.honour_no_color(std::env::var_os("NO_COLOR").as_deref());

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Run + 6. Error handling ───────────────────────────────────────
    match run(&config, &output) {
        Ok(()) => {
            info!("Skeleton completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color && output.supports_color()),
    }
}

#[instrument(skip_all)]
fn run(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let holder = StringValueHolder::new(config.demo.initial_value.clone());
    let report = demo::run(config, Box::new(holder));

    if output.is_quiet() {
        debug!("Quiet mode, report not rendered");
        return Ok(());
    }
    demo::render(&report, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
