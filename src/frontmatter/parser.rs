//! Line-oriented parser for the metadata block.
//!
//! Understands a small subset of the usual `key: value` notation:
//!
//! ```text
//! title: Plain value
//! quoted: "Value: with a colon"
//! description: |
//!   first line
//!   second line
//! items:
//!   - one
//!   - two
//! ```
//!
//! The parser never fails. Lines it cannot use are skipped and reported as
//! [`ParseNote`]s so a single bad line never aborts a build.
//!
//! Indented keys are stored at the top level. The outermost open key they
//! were written under is kept in [`ParseOutcome::owners`].

use std::collections::BTreeMap;
use std::fmt;

use super::value::{Mapping, Value};

/// Top-level section each indented key was written under.
pub type Owners = BTreeMap<String, String>;

/// How values starting with a quote character are unquoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotePolicy {
    /// Drop the first and last character whenever the value starts with
    /// `"` or `'`, whether or not the last character closes the quote.
    #[default]
    Naive,
    /// Drop the quotes only when the last character matches the first;
    /// otherwise keep the value as written.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub quotes: QuotePolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            quotes: QuotePolicy::Strict,
        }
    }
}

/// A non-fatal observation about one line of the metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNote {
    /// 1-based line number
    pub line: usize,
    pub kind: NoteKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteKind {
    /// `- item` line before any key was opened; the line is skipped
    OrphanItem,
    /// A string value was replaced by a sequence
    CoercedToSequence { key: String },
    /// A key was declared again and the earlier value dropped
    OverwrittenKey { key: String },
    /// An indented line that no open string value could take
    IgnoredContinuation,
    /// A quoted value whose last character does not close the quote
    UnbalancedQuote { key: String },
}

impl fmt::Display for ParseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            NoteKind::OrphanItem => write!(f, "list item without a preceding key, skipped"),
            NoteKind::CoercedToSequence { key } => {
                write!(f, "'{key}' turned into a list, earlier text dropped")
            }
            NoteKind::OverwrittenKey { key } => write!(f, "'{key}' declared again, last value wins"),
            NoteKind::IgnoredContinuation => write!(f, "line does not continue any text value, skipped"),
            NoteKind::UnbalancedQuote { key } => write!(f, "'{key}' has an unbalanced quote"),
        }
    }
}

/// Result of a parse: the best-effort mapping plus what was skipped or coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub mapping: Mapping,
    pub owners: Owners,
    pub notes: Vec<ParseNote>,
}

/// Parse a metadata block with the default (naive) quote policy.
#[cfg(test)]
pub fn parse(text: &str) -> ParseOutcome {
    parse_with(text, ParseOptions::default())
}

/// Parse a metadata block and keep only the mapping.
#[cfg(test)]
pub fn parse_mapping(text: &str) -> Mapping {
    parse(text).mapping
}

pub fn parse_with(text: &str, options: ParseOptions) -> ParseOutcome {
    let mut parser = LineParser::new(options);
    for (idx, line) in text.split('\n').enumerate() {
        parser.feed(idx + 1, line);
    }
    parser.finish()
}

struct LineParser {
    options: ParseOptions,
    mapping: Mapping,
    owners: Owners,
    notes: Vec<ParseNote>,
    /// Key opened by the last `key:` or `key: |` line
    current_key: Option<String>,
    /// Column of `current_key`
    indent: usize,
    /// Keys opened with an empty value or `|`, outermost first, with their column
    open: Vec<(String, usize)>,
}

impl LineParser {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            mapping: Mapping::new(),
            owners: Owners::new(),
            notes: Vec::new(),
            current_key: None,
            indent: 0,
            open: Vec::new(),
        }
    }

    fn finish(self) -> ParseOutcome {
        ParseOutcome {
            mapping: self.mapping,
            owners: self.owners,
            notes: self.notes,
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let column = line.chars().take_while(|c| c.is_whitespace()).count();

        if let Some((key, value)) = trimmed.split_once(':') {
            self.key_value(line_no, key.trim(), value.trim(), column);
        } else if let Some(item) = trimmed.strip_prefix('-') {
            self.sequence_item(line_no, item.trim());
        } else {
            self.continuation(line_no, trimmed, column);
        }
    }

    fn key_value(&mut self, line_no: usize, key: &str, value: &str, column: usize) {
        self.track_owner(key, column);

        if value.is_empty() || value == "|" {
            let placeholder = if value == "|" {
                Value::Block(String::new())
            } else {
                Value::Mapping(Mapping::new())
            };
            self.insert(line_no, key, placeholder);
            self.current_key = Some(key.to_string());
            self.indent = column;
            self.open.push((key.to_string(), column));
        } else if starts_with_quote(value) {
            let unquoted = self.unquote(line_no, key, value);
            self.insert(line_no, key, Value::Plain(unquoted));
        } else {
            self.insert(line_no, key, Value::Plain(value.to_string()));
        }
    }

    /// Close the open keys at or right of `column`; whatever is still open
    /// encloses `key`.
    fn track_owner(&mut self, key: &str, column: usize) {
        while self.open.last().is_some_and(|(_, indent)| *indent >= column) {
            self.open.pop();
        }
        match self.open.first() {
            Some((owner, _)) => {
                self.owners.insert(key.to_string(), owner.clone());
            }
            None => {
                self.owners.remove(key);
            }
        }
    }

    fn sequence_item(&mut self, line_no: usize, item: &str) {
        let Some(key) = self.current_key.clone() else {
            self.note(line_no, NoteKind::OrphanItem);
            return;
        };

        let item = if starts_with_quote(item) {
            self.unquote(line_no, &key, item)
        } else {
            item.to_string()
        };

        if !matches!(self.mapping.get(&key), Some(Value::Sequence(_))) {
            if self.mapping.get(&key).and_then(Value::as_str).is_some() {
                self.note(line_no, NoteKind::CoercedToSequence { key: key.clone() });
            }
            self.mapping.insert(key.clone(), Value::Sequence(Vec::new()));
        }

        if let Some(Value::Sequence(items)) = self.mapping.get_mut(&key) {
            items.push(item);
        }
    }

    fn continuation(&mut self, line_no: usize, text: &str, column: usize) {
        let target = match self.current_key.as_deref() {
            Some(key) if column > self.indent => self.mapping.get_mut(key),
            _ => None,
        };

        match target {
            Some(Value::Plain(s) | Value::Block(s)) => {
                if !s.is_empty() {
                    s.push('\n');
                }
                s.push_str(text);
            }
            _ => self.notes.push(ParseNote {
                line: line_no,
                kind: NoteKind::IgnoredContinuation,
            }),
        }
    }

    fn insert(&mut self, line_no: usize, key: &str, value: Value) {
        if self.mapping.insert(key.to_string(), value).is_some() {
            self.note(
                line_no,
                NoteKind::OverwrittenKey {
                    key: key.to_string(),
                },
            );
        }
    }

    fn unquote(&mut self, line_no: usize, key: &str, value: &str) -> String {
        let mut chars = value.chars();
        let open = chars.next();
        let close = chars.next_back();
        let balanced = close.is_some() && close == open;

        if !balanced {
            self.note(
                line_no,
                NoteKind::UnbalancedQuote {
                    key: key.to_string(),
                },
            );
        }

        match self.options.quotes {
            QuotePolicy::Naive => chars.as_str().to_string(),
            QuotePolicy::Strict if balanced => chars.as_str().to_string(),
            QuotePolicy::Strict => value.to_string(),
        }
    }

    fn note(&mut self, line: usize, kind: NoteKind) {
        self.notes.push(ParseNote { line, kind });
    }
}

fn starts_with_quote(value: &str) -> bool {
    value.starts_with('"') || value.starts_with('\'')
}
