//! Error types for the MNIST guide
//!
//! Provides error handling for:
//! - Artifact presentation (existence checks and reads)
//! - Configuration loading

use std::path::PathBuf;

/// Errors while presenting a single artifact slot
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    /// Artifact file does not exist at render time
    ///
    /// The only anticipated failure. Converted to an inline warning by the
    /// presenter and never propagated out of a page build.
    #[error("artifact '{slot}' not found at {path}")]
    ArtifactMissing {
        /// Slot identifier
        slot: String,
        /// Path that was checked
        path: PathBuf,
    },

    /// Path exists but is not a regular file
    #[error("artifact path is not a regular file: {path}")]
    NotAFile {
        /// Offending path
        path: PathBuf,
    },

    /// Any other read failure (permissions, invalid UTF-8)
    #[error("io error reading {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl PresentError {
    /// Create missing-artifact error for slot
    pub fn missing(slot: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ArtifactMissing {
            slot: slot.into(),
            path: path.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the recoverable missing-artifact case
    #[inline]
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::ArtifactMissing { .. })
    }
}

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`GuideConfig`](crate::config::GuideConfig)
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML decode error
        #[source]
        source: toml::de::Error,
    },

    /// Config parsed but a value is unusable
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Combined guide error
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    /// Artifact could not be presented
    #[error("present error: {0}")]
    Present(#[from] PresentError),

    /// Configuration rejected
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for guide operations
pub type GuideResult<T> = Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_display() {
        let err = PresentError::missing("pca", "visualizations/pca_visualization.png");
        assert_eq!(
            err.to_string(),
            "artifact 'pca' not found at visualizations/pca_visualization.png"
        );
        assert!(err.is_missing());
    }

    #[test]
    fn io_error_is_not_missing() {
        let err = PresentError::io_error(
            "visualizations/variance_analysis.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_missing());
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn error_conversions() {
        let err: GuideError = ConfigError::Invalid("output_dir is empty".into()).into();
        assert!(matches!(err, GuideError::Config(_)));

        let err: GuideError = PresentError::NotAFile { path: "x".into() }.into();
        assert!(matches!(err, GuideError::Present(_)));
    }
}
