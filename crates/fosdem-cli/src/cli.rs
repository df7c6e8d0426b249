//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fosdem_core::ExportFormat;

/// fosdem-schedule - Render the FOSDEM schedule as a single static page
#[derive(Debug, Parser)]
#[command(name = "fosdem-schedule")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output file path (defaults to a name matching the format)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Make rendered links open in a new browser tab
    #[arg(long)]
    pub new_tab: bool,
}

/// Output format flag; Markdown and CSV are experimental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Markdown,
    Csv,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ExportFormat::Html,
            OutputFormat::Markdown => ExportFormat::Markdown,
            OutputFormat::Csv => ExportFormat::Csv,
        }
    }
}
