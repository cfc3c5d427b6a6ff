//! Artifact presenter
//!
//! Check-then-display loading of artifact slots. A missing file becomes an
//! inline [`Block::Warning`] and the page build continues; every other fault is
//! returned to the caller.
//!
//! The presenter only ever inspects metadata and reads artifact files. It never
//! creates, writes or removes anything under the output directory.

use crate::artifact::{ArtifactKind, ArtifactSlot};
use crate::error::PresentError;
use crate::page::{Block, ImageSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads artifact slots from a fixed output directory
#[derive(Debug, Clone)]
pub struct ArtifactPresenter {
    output_dir: PathBuf,
}

impl ArtifactPresenter {
    /// Create presenter rooted at `output_dir`
    #[inline]
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output directory this presenter reads from
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Present one slot as page blocks
    ///
    /// # Errors
    /// Any failure other than a missing file.
    pub fn present_slot(&self, slot: &ArtifactSlot) -> Result<Vec<Block>, PresentError> {
        let path = slot.path_in(&self.output_dir);
        match slot.kind {
            ArtifactKind::Image => present_artifact(slot, &path).map(|b| vec![b]),
            ArtifactKind::Text => present_text(slot, &path),
        }
    }
}

/// Check that `path` is a present regular file
///
/// # Errors
/// [`PresentError::ArtifactMissing`] when absent, [`PresentError::NotAFile`]
/// when something other than a file sits at the path.
pub fn locate(slot: &ArtifactSlot, path: &Path) -> Result<(), PresentError> {
    let exists = path
        .try_exists()
        .map_err(|e| PresentError::io_error(path, e))?;
    if !exists {
        return Err(PresentError::missing(slot.id, path));
    }

    let meta = fs::metadata(path).map_err(|e| PresentError::io_error(path, e))?;
    if !meta.is_file() {
        return Err(PresentError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Media type for an image path, from its extension
#[must_use]
pub fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Present an image slot: the image with its caption, or a warning
///
/// Image bytes are read here so the rendered page is self-contained. They are
/// not decoded.
///
/// # Errors
/// Any failure other than a missing file, including a failed read.
pub fn present_artifact(slot: &ArtifactSlot, path: &Path) -> Result<Block, PresentError> {
    match locate(slot, path) {
        Ok(()) => {
            let data = fs::read(path).map_err(|e| PresentError::io_error(path, e))?;
            debug!(
                slot = slot.id,
                path = %path.display(),
                bytes = data.len(),
                "image artifact present"
            );
            Ok(Block::Image {
                source: ImageSource::Local {
                    path: path.to_path_buf(),
                    mime: image_mime(path),
                    data,
                },
                caption: slot.label.to_string(),
            })
        }
        Err(e) if e.is_missing() => Ok(missing_block(slot, path)),
        Err(e) => Err(e),
    }
}

/// Present a text slot: subheader plus verbatim contents, or a warning
///
/// The subheader is only emitted when the file exists.
///
/// # Errors
/// Any failure other than a missing file, including contents that are not
/// valid UTF-8.
pub fn present_text(slot: &ArtifactSlot, path: &Path) -> Result<Vec<Block>, PresentError> {
    match locate(slot, path) {
        Ok(()) => {
            let content =
                fs::read_to_string(path).map_err(|e| PresentError::io_error(path, e))?;
            debug!(
                slot = slot.id,
                path = %path.display(),
                bytes = content.len(),
                "text artifact present"
            );
            Ok(vec![
                Block::Subheader(slot.label.to_string()),
                Block::Text(content),
            ])
        }
        Err(e) if e.is_missing() => Ok(vec![missing_block(slot, path)]),
        Err(e) => Err(e),
    }
}

fn missing_block(slot: &ArtifactSlot, path: &Path) -> Block {
    warn!(slot = slot.id, path = %path.display(), "artifact not found");
    Block::Warning(slot.missing_message.to_string())
}
