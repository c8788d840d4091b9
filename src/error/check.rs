//! Metadata report errors

use super::FrontpageError;

/// Creates a serialization error for the given output format
pub fn serialize_failed(format: impl Into<String>, reason: impl ToString) -> FrontpageError {
    FrontpageError::SerializationFailed {
        format: format.into(),
        reason: reason.to_string(),
    }
}
