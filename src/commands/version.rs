//! Version command implementation
//!
//! Prints the version together with the paths a `build` would use from the
//! current directory.

use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::config::FrontpageConfig;
use crate::error::Result;

/// Run version command
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = helpers::load_config(config.as_deref())?;

    println!("frontpage {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", Style::new().bold().green().apply_to("Active settings:"));
    print!("{}", describe(&config));

    Ok(())
}

fn describe(config: &FrontpageConfig) -> String {
    let source = config
        .source
        .as_ref()
        .map_or_else(|| "none, using defaults".to_string(), |p| p.display().to_string());
    let quotes = if config.strict_quotes { "strict" } else { "naive" };

    format!(
        "  Config: {source}\n  Input: {}\n  Output: {}\n  Quotes: {quotes}\n",
        config.input.display(),
        config.output.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_defaults() {
        let text = describe(&FrontpageConfig::default());
        assert_eq!(
            text,
            "  Config: none, using defaults\n  Input: public/content/pages/home.md\n  Output: public/index.html\n  Quotes: naive\n"
        );
    }

    #[test]
    fn test_describe_config_file() {
        let config = FrontpageConfig {
            source: Some(PathBuf::from("site/frontpage.yaml")),
            strict_quotes: true,
            ..FrontpageConfig::default()
        };
        let text = describe(&config);
        assert!(text.contains("Config: site/frontpage.yaml"));
        assert!(text.contains("Quotes: strict"));
    }
}
