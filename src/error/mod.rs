//! Error types and handling for Frontpage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`check`]: Metadata report errors
//! - [`document`]: Content document errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`render`]: Page rendering errors
//!
//! Metadata lines the parser cannot interpret are never errors; they are
//! reported as [`crate::frontmatter::ParseNote`]s instead.

pub mod check;
pub mod config;
pub mod document;
pub mod fs;
pub mod render;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Frontpage operations
#[derive(Error, Diagnostic, Debug)]
pub enum FrontpageError {
    // Document errors
    #[error("Invalid document format")]
    #[diagnostic(
        code(frontpage::document::invalid_format),
        help(
            "The document must start with a line containing only '---', followed by the \
             metadata block and a closing '---' line"
        )
    )]
    InvalidDocumentFormat,

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(frontpage::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(frontpage::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(frontpage::config::parse_failed),
        help("Known keys: input, output, strict_quotes, site")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(frontpage::config::invalid))]
    ConfigInvalid { message: String },

    // Rendering errors
    #[error("Section '{name}' is not registered (known sections: {known})")]
    #[diagnostic(code(frontpage::render::section_not_found))]
    SectionNotFound { name: String, known: String },

    #[error("Failed to render page template: {reason}")]
    #[diagnostic(code(frontpage::render::template))]
    TemplateFailed { reason: String },

    // Check errors
    #[error("Failed to serialize metadata as {format}: {reason}")]
    #[diagnostic(code(frontpage::check::serialize))]
    SerializationFailed { format: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(frontpage::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(frontpage::fs::not_found),
        help("Pass --input or set 'input' in frontpage.yaml")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(frontpage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(frontpage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(frontpage::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FrontpageError {
    fn from(err: std::io::Error) -> Self {
        FrontpageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FrontpageError {
    fn from(err: serde_yaml::Error) -> Self {
        FrontpageError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FrontpageError {
    fn from(err: serde_json::Error) -> Self {
        FrontpageError::SerializationFailed {
            format: "JSON".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FrontpageError>;
