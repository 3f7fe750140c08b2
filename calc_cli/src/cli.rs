//! Command-line parsing for `fdmcalc`.
//!
//! Two modes: `--dump-template` writes a zero-valued input file to fill in,
//! `--import` computes a cost breakdown from a filled-in file.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use calc_core::file_io::DEFAULT_TEMPLATE_FILE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fdmcalc", version, about = "FDM Printing Cost Calculator")]
pub struct Cli {
    /// Path to input JSON file.
    #[arg(long = "import", value_name = "JSON")]
    pub import_file: Option<PathBuf>,

    /// Path to save results (JSON). Without it, results go to stdout.
    #[arg(long = "export", value_name = "JSON", requires = "import_file")]
    pub export_file: Option<PathBuf>,

    /// Generate a template JSON file (defaults to fdmcalc_template.json).
    #[arg(
        long = "dump-template",
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_TEMPLATE_FILE
    )]
    pub dump_template: Option<PathBuf>,

    /// How results are printed to stdout. Exported files are always JSON.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, conflicts_with = "export_file")]
    pub format: OutputFormat,

    /// Suppress all stdout output.
    #[arg(long)]
    pub silent: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Stdout rendering of a cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Labeled table
    Text,
}

/// What an invocation should do.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    Template(&'a Path),
    Compute {
        import: &'a Path,
        export: Option<&'a Path>,
    },
    Help,
}

impl Cli {
    /// Resolve the flags into a mode. Template mode wins over compute mode.
    pub fn mode(&self) -> Mode<'_> {
        if let Some(path) = &self.dump_template {
            return Mode::Template(path.as_path());
        }
        match &self.import_file {
            Some(import) => Mode::Compute {
                import: import.as_path(),
                export: self.export_file.as_deref(),
            },
            None => Mode::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_is_help() {
        let cli = Cli::try_parse_from(["fdmcalc"]).unwrap();
        assert_eq!(cli.mode(), Mode::Help);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.silent);
    }

    #[test]
    fn test_dump_template_default_path() {
        let cli = Cli::try_parse_from(["fdmcalc", "--dump-template"]).unwrap();
        assert_eq!(cli.mode(), Mode::Template(Path::new("fdmcalc_template.json")));
    }

    #[test]
    fn test_dump_template_custom_path() {
        let cli = Cli::try_parse_from(["fdmcalc", "--dump-template", "job.json", "--silent"]).unwrap();
        assert_eq!(cli.mode(), Mode::Template(Path::new("job.json")));
        assert!(cli.silent);
    }

    #[test]
    fn test_template_wins_over_import() {
        let cli = Cli::try_parse_from(["fdmcalc", "--import", "in.json", "--dump-template"]).unwrap();
        assert!(matches!(cli.mode(), Mode::Template(_)));
    }

    #[test]
    fn test_import_and_export() {
        let cli = Cli::try_parse_from([
            "fdmcalc", "--import", "in.json", "--export", "out.json", "-v",
        ])
        .unwrap();
        assert_eq!(
            cli.mode(),
            Mode::Compute {
                import: Path::new("in.json"),
                export: Some(Path::new("out.json")),
            }
        );
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_text_format_to_stdout() {
        let cli = Cli::try_parse_from(["fdmcalc", "--import", "in.json", "--format", "text"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_format_conflicts_with_export() {
        let err = Cli::try_parse_from([
            "fdmcalc", "--import", "in.json", "--export", "out.json", "--format", "text",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_export_requires_import() {
        assert!(Cli::try_parse_from(["fdmcalc", "--export", "out.json"]).is_err());
    }
}
