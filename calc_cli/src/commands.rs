//! Command dispatch: template mode and compute mode.

use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, info};

use calc_core::{calculate, load_input, save_json, write_template, CalcError, CalcResult, CostBreakdown};

use crate::cli::{Cli, Mode, OutputFormat};
use crate::output;

/// Run the mode selected by the parsed flags.
pub fn run(cli: &Cli) -> CalcResult<()> {
    match cli.mode() {
        Mode::Template(path) => dump_template(path, cli.silent),
        Mode::Compute { import, export } => run_calculator(import, export, cli.format, cli.silent),
        Mode::Help => Cli::command()
            .print_help()
            .map_err(|e| CalcError::file_error("write", "stdout", e.to_string())),
    }
}

/// Write the zero-valued input template.
pub fn dump_template(path: &Path, silent: bool) -> CalcResult<()> {
    write_template(path)?;
    info!(path = %path.display(), "exported template");
    if !silent {
        println!("Exported template to {}", path.display());
    }
    Ok(())
}

/// Load an input, compute it, and either save or print the breakdown.
pub fn run_calculator(import: &Path, export: Option<&Path>, format: OutputFormat, silent: bool) -> CalcResult<()> {
    let result = compute(import, export)?;

    match export {
        Some(path) => {
            if !silent {
                println!("Results exported to {}", path.display());
            }
        }
        None => {
            if !silent {
                println!("{}", output::render(&result, format)?);
            }
        }
    }
    Ok(())
}

/// Load, validate and compute; save to `export` when given.
pub fn compute(import: &Path, export: Option<&Path>) -> CalcResult<CostBreakdown> {
    debug!(import = %import.display(), "computing cost");
    let input = load_input(import)?;
    let result = calculate(&input)?;

    if let Some(path) = export {
        save_json(&result, path)?;
        info!(path = %path.display(), "exported results");
    }
    Ok(result)
}

/// Process exit status for a failed run.
///
/// Status 2 is left to clap for argument errors.
pub fn exit_code(err: &CalcError) -> u8 {
    match err {
        CalcError::InputNotFound { .. } => 3,
        CalcError::MalformedInput { .. } => 4,
        CalcError::InvalidInput { .. } | CalcError::CalculationFailed { .. } => 5,
        CalcError::FileError { .. } | CalcError::SerializationError { .. } => 6,
    }
}
