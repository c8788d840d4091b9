//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod check;
pub mod completions;

pub use build::BuildArgs;
pub use check::{CheckArgs, CheckFormat};
pub use completions::CompletionsArgs;

/// Frontpage - landing page generator
///
/// Render a static landing page from a content document with a metadata block.
#[derive(Parser, Debug)]
#[command(
    name = "frontpage",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Static landing page generator driven by a front-matter content file",
    long_about = "Frontpage reads a content document that starts with a '---' delimited \
                  metadata block, and fills the landing page template with its fields.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  frontpage build                          \x1b[90m# Build public/index.html\x1b[0m\n   \
                  frontpage build -i home.md -o out.html   \x1b[90m# Build from explicit paths\x1b[0m\n   \
                  frontpage check                          \x1b[90m# Show parsed metadata and notes\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./frontpage.yaml when present)
    #[arg(long, short = 'c', global = true, env = "FRONTPAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the landing page
    Build(BuildArgs),

    /// Parse the content document and report what was found
    Check(CheckArgs),

    /// Show the version and the settings a build would use
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
