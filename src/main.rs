//! Frontpage - landing page generator
//!
//! Reads a content document whose metadata block sits between two `---`
//! lines and renders it into a static HTML landing page.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod logging;
mod render;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.config, cli.quiet, args),
        Commands::Check(args) => commands::check::run(cli.config, args),
        Commands::Version => commands::version::run(cli.config),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
