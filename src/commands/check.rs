//! Check command implementation
//!
//! Loads the content document and shows what the parser made of it, without
//! writing anything.

use std::fmt::Write as _;
use std::path::PathBuf;

use console::Style;

use super::helpers;
use crate::cli::{CheckArgs, CheckFormat};
use crate::error::{Result, check};
use crate::frontmatter::{self, Mapping, ParseNote, ParsedDocument, Value};
use crate::render::{Fields, SectionRegistry};

/// Run check command
pub fn run(config: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let config =
        helpers::load_config(config.as_deref())?.with_overrides(args.input, None, args.strict_quotes);

    let text = helpers::read_document(&config.input)?;
    let document = frontmatter::load_with(&text, config.parse_options())?;

    if let Some(name) = args.section {
        let registry = SectionRegistry::with_defaults();
        let section = registry.render(&name, &Fields::of(&document))?;
        return print_section(&name, &section, args.format);
    }

    match args.format {
        CheckFormat::Text => print_text(&document),
        CheckFormat::Json => {
            helpers::report_notes(&config.input, &document.notes);
            println!("{}", serde_json::to_string_pretty(&document.metadata)?);
        }
        CheckFormat::Yaml => {
            helpers::report_notes(&config.input, &document.notes);
            print!("{}", to_yaml(&document.metadata)?);
        }
    }

    Ok(())
}

fn print_text(document: &ParsedDocument) {
    let header = Style::new().bold().green();
    println!(
        "{} ({} keys)",
        header.apply_to("Metadata"),
        document.metadata.len()
    );
    print!("{}", format_metadata(&document.metadata));
    println!(
        "{} {} bytes",
        header.apply_to("Body:"),
        document.body.len()
    );

    if document.notes.is_empty() {
        println!("{}", header.apply_to("No parser notes"));
    } else {
        println!("{}", header.apply_to("Notes:"));
        print!("{}", format_notes(&document.notes));
    }
}

/// Template variable built by one section.
fn print_section(name: &str, section: &serde_json::Value, format: CheckFormat) -> Result<()> {
    match format {
        CheckFormat::Text => {
            println!("{}", Style::new().bold().cyan().apply_to(name));
            println!("{}", serde_json::to_string_pretty(section)?);
        }
        CheckFormat::Json => println!("{}", serde_json::to_string_pretty(section)?),
        CheckFormat::Yaml => print!("{}", to_yaml(section)?),
    }

    Ok(())
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| check::serialize_failed("YAML", e))
}

/// One entry per key, multi-line values indented below it.
fn format_metadata(metadata: &Mapping) -> String {
    let mut out = String::new();
    for (key, value) in metadata {
        match value {
            Value::Plain(text) => {
                let _ = writeln!(out, "  {key}: {text}");
            }
            Value::Block(text) => {
                let _ = writeln!(out, "  {key}: |");
                for line in text.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            Value::Sequence(items) => {
                let _ = writeln!(out, "  {key}:");
                for item in items {
                    let _ = writeln!(out, "    - {item}");
                }
            }
            Value::Mapping(map) if map.is_empty() => {
                let _ = writeln!(out, "  {key}: {{}}");
            }
            Value::Mapping(map) => {
                let _ = writeln!(out, "  {key}: {{{} keys}}", map.len());
            }
        }
    }
    out
}

fn format_notes(notes: &[ParseNote]) -> String {
    notes.iter().fold(String::new(), |mut out, note| {
        let _ = writeln!(out, "  {note}");
        out
    })
}
