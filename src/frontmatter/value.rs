//! Values produced by the metadata parser.

use std::collections::BTreeMap;

use serde::Serialize;

/// Top-level metadata: key to value.
///
/// Iteration order is not meaningful to consumers; a `BTreeMap` keeps
/// the `check` output stable.
pub type Mapping = BTreeMap<String, Value>;

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Single-line string, quote-stripped
    Plain(String),
    /// Multi-line string opened by `key: |`
    Block(String),
    /// Ordered list of plain strings from `- item` lines
    Sequence(Vec<String>),
    /// Placeholder opened by `key:` with an empty value.
    ///
    /// The parser never populates it: indented `key: value` lines land in
    /// the top-level mapping.
    Mapping(Mapping),
}

impl Value {
    /// String contents of a `Plain` or `Block` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Plain(s) | Value::Block(s) => Some(s),
            Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Plain(s.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::Sequence(items.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_covers_plain_and_block() {
        assert_eq!(Value::Plain("a".into()).as_str(), Some("a"));
        assert_eq!(Value::Block("a\nb".into()).as_str(), Some("a\nb"));
        assert_eq!(Value::from(vec!["a"]).as_str(), None);
        assert_eq!(Value::Mapping(Mapping::new()).as_str(), None);
    }

    #[test]
    fn test_serialize_untagged() {
        let mut map = Mapping::new();
        map.insert("title".into(), Value::from("Hello"));
        map.insert("items".into(), Value::from(vec!["a", "b"]));
        map.insert("hero".into(), Value::Mapping(Mapping::new()));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"hero":{},"items":["a","b"],"title":"Hello"}"#);
    }
}
