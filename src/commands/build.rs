//! Build command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::BuildArgs;
use crate::error::Result;
use crate::frontmatter;
use crate::render::{self, SectionRegistry};

/// Run build command
pub fn run(config: Option<PathBuf>, quiet: bool, args: BuildArgs) -> Result<()> {
    let config = helpers::load_config(config.as_deref())?.with_overrides(
        args.input,
        args.output,
        args.strict_quotes,
    );

    let text = helpers::read_document(&config.input)?;
    let document = frontmatter::load_with(&text, config.parse_options())?;
    helpers::report_notes(&config.input, &document.notes);

    let registry = SectionRegistry::with_defaults();
    let page = render::render_page(&document, &config.site, &registry)?;

    if args.dry_run {
        print!("{page}");
        return Ok(());
    }

    helpers::write_page(&config.output, &page)?;
    tracing::info!(output = %config.output.display(), bytes = page.len(), "page written");

    if !quiet {
        println!(
            "{} {} generated",
            Style::new().green().bold().apply_to("✅"),
            config.output.display()
        );
    }

    Ok(())
}
