use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the check command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show parsed metadata and parser notes:\n    frontpage check\n\n\
                  Dump metadata as JSON:\n    frontpage check --format json\n\n\
                  Preview the template variables of one section:\n    frontpage check --section hero")]
pub struct CheckArgs {
    /// Content document (defaults to public/content/pages/home.md)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = CheckFormat::Text)]
    pub format: CheckFormat,

    /// Show the template variables of one section instead of the metadata
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,

    /// Only strip quotes that are properly closed
    #[arg(long)]
    pub strict_quotes: bool,
}
