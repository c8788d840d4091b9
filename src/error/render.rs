//! Page rendering errors

use super::FrontpageError;

/// Creates a section not found error listing the registered sections
pub fn section_not_found<'a>(
    name: impl Into<String>,
    known: impl IntoIterator<Item = &'a str>,
) -> FrontpageError {
    FrontpageError::SectionNotFound {
        name: name.into(),
        known: known.into_iter().collect::<Vec<_>>().join(", "),
    }
}

/// Creates a template error, keeping the causes tera reports below its
/// top-level message
pub fn template_failed(err: &tera::Error) -> FrontpageError {
    let mut reason = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    FrontpageError::TemplateFailed { reason }
}
