//! Configuration file handling for Frontpage
//!
//! An optional `frontpage.yaml` in the working directory (or the file given
//! with `--config` / `FRONTPAGE_CONFIG`) sets the input and output paths,
//! the quoting policy and the site texts. Command-line flags win over it.

pub mod site;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};
use crate::frontmatter::ParseOptions;

pub use site::SiteConfig;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "frontpage.yaml";

/// Content document read when nothing else is configured
pub const DEFAULT_INPUT: &str = "public/content/pages/home.md";

/// Page written when nothing else is configured
pub const DEFAULT_OUTPUT: &str = "public/index.html";

/// Frontpage configuration (frontpage.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontpageConfig {
    /// Content document with the metadata block
    pub input: PathBuf,

    /// Generated HTML page
    pub output: PathBuf,

    /// Only strip quotes that are properly closed
    pub strict_quotes: bool,

    pub site: SiteConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for FrontpageConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict_quotes: false,
            site: SiteConfig::default(),
            source: None,
        }
    }
}

impl FrontpageConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `frontpage.yaml` in `dir`
    /// is used when present, otherwise the defaults. Relative `input` and
    /// `output` paths are resolved against the directory holding the file.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(config::not_found(path.display().to_string()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!(dir = %dir.display(), "no {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default().resolved_against(dir));
                }
                candidate
            }
        };

        let shown_path = path.display().to_string();
        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config::read_failed(&shown_path, e.to_string()))?;
        let mut loaded = Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::FrontpageError::ConfigParseFailed { reason, .. } => {
                config::parse_failed(&shown_path, reason)
            }
            other => other,
        })?;

        tracing::debug!(path = %shown_path, "loaded configuration");
        let base = path.parent().unwrap_or(dir).to_path_buf();
        loaded.source = Some(path);
        Ok(loaded.resolved_against(&base))
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        strict_quotes: bool,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self.strict_quotes |= strict_quotes;
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        if self.strict_quotes {
            ParseOptions::strict()
        } else {
            ParseOptions::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(config::invalid("'input' must not be empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(config::invalid("'output' must not be empty"));
        }
        Ok(())
    }

    fn resolved_against(mut self, base: &Path) -> Self {
        if self.input.is_relative() {
            self.input = base.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontpageError;
    use crate::frontmatter::QuotePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FrontpageConfig::default();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(!config.strict_quotes);
        assert_eq!(config.site.lang, "fr");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = FrontpageConfig::from_yaml(
            "output: dist/index.html\nsite:\n  name: Code Club\n",
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("dist/index.html"));
        assert_eq!(config.site.name, "Code Club");
        assert_eq!(config.site.lang, "fr");
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(
            FrontpageConfig::from_yaml("").unwrap(),
            FrontpageConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = FrontpageConfig::from_yaml("colour: blue\n").unwrap_err();
        assert!(matches!(err, FrontpageError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_empty_output() {
        let err = FrontpageConfig::from_yaml("output: ''\n").unwrap_err();
        assert!(matches!(err, FrontpageError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_parse_options() {
        let mut config = FrontpageConfig::default();
        assert_eq!(config.parse_options().quotes, QuotePolicy::Naive);
        config.strict_quotes = true;
        assert_eq!(config.parse_options().quotes, QuotePolicy::Strict);
    }

    #[test]
    fn test_overrides_win() {
        let config = FrontpageConfig::default().with_overrides(
            Some(PathBuf::from("in.md")),
            None,
            true,
        );
        assert_eq!(config.input, PathBuf::from("in.md"));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.strict_quotes);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = FrontpageConfig::load(None, temp.path()).unwrap();
        assert_eq!(config.input, temp.path().join(DEFAULT_INPUT));
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_load_explicit_file_records_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("conf/site.yaml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "output: dist/index.html\n").unwrap();

        let config = FrontpageConfig::load(Some(&path), temp.path()).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.output, temp.path().join("conf/dist/index.html"));
    }

    #[test]
    fn test_load_discovers_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "input: content/home.md\nstrict_quotes: true\n",
        )
        .unwrap();
        let config = FrontpageConfig::load(None, temp.path()).unwrap();
        assert_eq!(config.input, temp.path().join("content/home.md"));
        assert!(config.strict_quotes);
    }

    #[test]
    fn test_load_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        let err = FrontpageConfig::load(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, FrontpageError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        std::fs::write(&path, "strict_quotes: [1, 2\n").unwrap();
        let err = FrontpageConfig::load(Some(&path), temp.path()).unwrap_err();
        match err {
            FrontpageError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with("custom.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
