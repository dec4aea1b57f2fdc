//! CLI argument definitions for the MVC converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mvc-converter",
    version,
    about = "MVC Converter - Generate FHIR Shorthand value sets from the Master Value set Catalogue",
    long_about = "Convert the eHDSI Master Value set Catalogue to FHIR Shorthand (FSH).\n\n\
                  Reads the catalogue and metadata workbooks, writes one .fsh document per\n\
                  published value set, and reports unknown names and code-system OIDs as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a catalogue workbook and write FSH documents.
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the Master Value set Catalogue workbook.
    #[arg(value_name = "CATALOGUE_XLSX")]
    pub catalogue: PathBuf,

    /// Path to the metadata workbook (value-set and code-system tables).
    #[arg(value_name = "METADATA_XLSX")]
    pub metadata: PathBuf,

    /// Output directory for FSH documents and anomaly reports.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
