use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build with paths from frontpage.yaml (or the defaults):\n    frontpage build\n\n\
                  Build from a specific document:\n    frontpage build --input content/home.md --output dist/index.html\n\n\
                  Print the page instead of writing it:\n    frontpage build --dry-run")]
pub struct BuildArgs {
    /// Content document (defaults to public/content/pages/home.md)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Generated page (defaults to public/index.html)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only strip quotes that are properly closed
    #[arg(long)]
    pub strict_quotes: bool,

    /// Print the page to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
