//! Split a content document into its metadata block and body.

use std::sync::LazyLock;

use regex::Regex;

use super::parser::{Owners, ParseNote, ParseOptions, parse_with};
use super::value::Mapping;
use crate::error::{Result, document};

/// `---` line, metadata up to the first `\n---\n`, then the body to end of input.
#[allow(clippy::expect_used)]
static DOCUMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("document pattern is valid")
});

/// A loaded content document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: Mapping,
    /// Section each indented metadata key was written under
    pub owners: Owners,
    /// Text after the closing delimiter, verbatim
    pub body: String,
    /// Parser notes, with line numbers relative to the whole document
    pub notes: Vec<ParseNote>,
}

/// Load a document with the default parse options.
#[cfg(test)]
pub fn load(text: &str) -> Result<ParsedDocument> {
    load_with(text, ParseOptions::default())
}

/// Load a document.
///
/// Fails with [`crate::error::FrontpageError::InvalidDocumentFormat`] unless
/// the text starts with a `---` line and contains a closing `---` line.
pub fn load_with(text: &str, options: ParseOptions) -> Result<ParsedDocument> {
    let captures = DOCUMENT_PATTERN
        .captures(text)
        .ok_or_else(document::invalid_format)?;

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let outcome = parse_with(block, options);
    tracing::debug!(
        keys = outcome.mapping.len(),
        notes = outcome.notes.len(),
        body_bytes = body.len(),
        "loaded document"
    );

    // The block starts on the second line of the document.
    let notes = outcome
        .notes
        .into_iter()
        .map(|note| ParseNote {
            line: note.line + 1,
            ..note
        })
        .collect();

    Ok(ParsedDocument {
        metadata: outcome.mapping,
        owners: outcome.owners,
        body: body.to_string(),
        notes,
    })
}
