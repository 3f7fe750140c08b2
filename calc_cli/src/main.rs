//! # FDMCalc CLI Application
//!
//! Command-line front end for the calc_core cost engine.
//!
//! ```text
//! fdmcalc --dump-template [PATH]          write a zero-valued input to fill in
//! fdmcalc --import job.json               print the cost breakdown as JSON
//! fdmcalc --import job.json --format text print a labeled table instead
//! fdmcalc --import job.json --export out.json
//! ```
//!
//! Errors go to stderr and end the run with a non-zero status.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "run failed");
            eprintln!("Error: {}", err);
            ExitCode::from(commands::exit_code(&err))
        }
    }
}

/// Initialize logging with tracing. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "calc_core=debug,fdmcalc=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
