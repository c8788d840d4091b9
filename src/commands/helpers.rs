//! Command helper utilities

use std::path::Path;

use crate::config::FrontpageConfig;
use crate::error::{Result, fs};
use crate::frontmatter::ParseNote;

/// Load configuration relative to the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<FrontpageConfig> {
    let current_dir = std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {}", e)))?;
    FrontpageConfig::load(explicit, &current_dir)
}

/// Read a content document
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(fs::not_found(path));
    }
    std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, e))
}

/// Write the generated page, creating its directory if needed
pub fn write_page(path: &Path, page: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(path, e))?;
    }
    std::fs::write(path, page).map_err(|e| fs::write_failed(path, e))
}

/// Log parser notes as warnings
pub fn report_notes(path: &Path, notes: &[ParseNote]) {
    for note in notes {
        tracing::warn!(file = %path.display(), "{}", note);
    }
}
