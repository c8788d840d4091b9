//! Content document errors

use super::FrontpageError;

/// Creates the error returned when the `---` delimiters are missing or malformed
pub fn invalid_format() -> FrontpageError {
    FrontpageError::InvalidDocumentFormat
}
