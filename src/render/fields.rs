//! Field lookup over parsed metadata.
//!
//! The parser keeps everything at the top level, so `hero.title` written as
//!
//! ```text
//! hero:
//!   title: "Bienvenue"
//! ```
//!
//! ends up as a top-level `title` owned by `hero`. Lookups therefore try,
//! in order: the section's own mapping, the prefixed top-level key
//! `hero_title`, then the bare top-level key `title` when it was written
//! under `hero`. A bare key written under another section, or outside any
//! section, never fills this one.

use crate::frontmatter::{Mapping, Owners, ParsedDocument, Value};

#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    metadata: &'a Mapping,
    owners: &'a Owners,
}

impl<'a> Fields<'a> {
    pub fn new(metadata: &'a Mapping, owners: &'a Owners) -> Self {
        Self { metadata, owners }
    }

    pub fn of(document: &'a ParsedDocument) -> Self {
        Self::new(&document.metadata, &document.owners)
    }

    /// Non-empty text of `section.field`.
    pub fn text(&self, section: &str, field: &str) -> Option<&'a str> {
        self.lookup(section, field, |v| v.as_str().filter(|s| !s.is_empty()))
    }

    /// Text of `section.field`, or `default` when missing or empty.
    pub fn text_or(&self, section: &str, field: &str, default: &'a str) -> &'a str {
        self.text(section, field).unwrap_or(default)
    }

    /// List at `section.field`; empty when missing.
    pub fn list(&self, section: &str, field: &str) -> &'a [String] {
        self.lookup(section, field, Value::as_sequence)
            .unwrap_or_default()
    }

    /// List stored directly under a top-level key; empty when missing.
    pub fn top_list(&self, key: &str) -> &'a [String] {
        self.metadata
            .get(key)
            .and_then(Value::as_sequence)
            .unwrap_or_default()
    }

    fn lookup<T: ?Sized>(
        &self,
        section: &str,
        field: &str,
        extract: impl Fn(&'a Value) -> Option<&'a T>,
    ) -> Option<&'a T> {
        let nested = self
            .metadata
            .get(section)
            .and_then(Value::as_mapping)
            .and_then(|m| m.get(field));

        nested
            .and_then(&extract)
            .or_else(|| {
                self.metadata
                    .get(&format!("{section}_{field}"))
                    .and_then(&extract)
            })
            .or_else(|| {
                self.owners
                    .get(field)
                    .filter(|owner| owner.as_str() == section)
                    .and_then(|_| self.metadata.get(field))
                    .and_then(&extract)
            })
    }
}
