//! Guide configuration
//!
//! Loaded from an optional TOML file. Every key has a default, so an empty
//! file (or no file at all) yields the standard guide:
//!
//! ```toml
//! output_dir = "visualizations"
//! sample_image_url = "https://upload.wikimedia.org/wikipedia/commons/2/27/MnistExamples.png"
//!
//! [page]
//! title = "MNIST Dimensionality Reduction Guide"
//! icon = "🖼️"
//! layout = "wide"
//! ```

use crate::error::ConfigError;
use crate::page::{Layout, PageSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default artifact directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "visualizations";

/// Default illustrative image of sample digits
pub const DEFAULT_SAMPLE_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/2/27/MnistExamples.png";

/// Guide configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    /// Directory holding the precomputed artifacts
    pub output_dir: PathBuf,
    /// Remote image shown in the introduction
    pub sample_image_url: String,
    /// Page-level settings
    pub page: PageSettings,
}

impl GuideConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With output directory
    #[inline]
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// With sample image URL
    #[inline]
    #[must_use]
    pub fn with_sample_image_url(mut self, url: impl Into<String>) -> Self {
        self.sample_image_url = url.into();
        self
    }

    /// With page layout
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.page.layout = layout;
        self
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Invalid TOML, unknown keys, or values rejected by [`Self::validate`].
    pub fn from_toml_str(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Unreadable file or anything [`Self::from_toml_str`] rejects.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&source, path)
    }

    /// Check values that parse but cannot be used
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for an empty output directory or image URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output_dir must not be empty".into()));
        }
        if self.sample_image_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "sample_image_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sample_image_url: DEFAULT_SAMPLE_IMAGE_URL.to_string(),
            page: PageSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = GuideConfig::from_toml_str("", Path::new("guide.toml")).unwrap();
        assert_eq!(config, GuideConfig::default());
        assert_eq!(config.output_dir, Path::new("visualizations"));
    }

    #[test]
    fn partial_toml_overrides() {
        let source = r#"
output_dir = "artifacts/run-3"

[page]
layout = "centered"
"#;
        let config = GuideConfig::from_toml_str(source, Path::new("guide.toml")).unwrap();
        assert_eq!(config.output_dir, Path::new("artifacts/run-3"));
        assert_eq!(config.page.layout, Layout::Centered);
        assert_eq!(config.page.title, "MNIST Dimensionality Reduction Guide");
        assert_eq!(config.sample_image_url, DEFAULT_SAMPLE_IMAGE_URL);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = GuideConfig::from_toml_str("cache = true", Path::new("guide.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_output_dir_rejected() {
        let err = GuideConfig::from_toml_str("output_dir = \"\"", Path::new("guide.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GuideConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builders_chain() {
        let config = GuideConfig::new()
            .with_output_dir("out")
            .with_sample_image_url("https://example.com/digits.png")
            .with_layout(Layout::Centered);
        assert_eq!(config.output_dir, Path::new("out"));
        assert_eq!(config.sample_image_url, "https://example.com/digits.png");
        assert_eq!(config.page.layout, Layout::Centered);
    }
}
