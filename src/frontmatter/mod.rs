//! Front matter of content documents
//!
//! A content document starts with a metadata block between two `---` lines,
//! followed by a free-form body. The block is read by a small lenient parser
//! that produces plain strings, block scalars and lists of strings; it never
//! nests mappings, but remembers which section an indented key belonged to.

mod document;
mod parser;
mod value;

pub use document::{ParsedDocument, load_with};
pub use parser::{Owners, ParseNote, ParseOptions};
pub use value::{Mapping, Value};

#[cfg(test)]
pub use document::load;
#[cfg(test)]
pub use parser::{NoteKind, ParseOutcome, QuotePolicy, parse, parse_mapping};
