//! Artifact status report
//!
//! Existence scan over every slot without reading contents. Backs the `check`
//! command.

use crate::artifact::{ArtifactKind, ArtifactSlot, ALL_SLOTS};
use crate::error::PresentError;
use crate::presenter::locate;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Status of one artifact file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    /// Regular file present
    Present,
    /// Nothing at the path
    Missing,
    /// Something is at the path but it cannot be shown
    Invalid,
}

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    /// Slot identifier
    pub slot: &'static str,
    /// Display kind
    pub kind: ArtifactKind,
    /// Resolved path
    pub path: PathBuf,
    /// Current status
    pub status: ArtifactStatus,
    /// Failure detail for [`ArtifactStatus::Invalid`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Status of all slots under one output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactReport {
    /// Directory that was scanned
    pub output_dir: PathBuf,
    /// One entry per slot, page order
    pub entries: Vec<ArtifactEntry>,
}

impl ArtifactReport {
    /// Scan every slot under `output_dir`
    #[must_use]
    pub fn scan(output_dir: &Path) -> Self {
        let entries = ALL_SLOTS
            .iter()
            .map(|slot| Self::entry(slot, output_dir))
            .collect();
        Self {
            output_dir: output_dir.to_path_buf(),
            entries,
        }
    }

    fn entry(slot: &ArtifactSlot, output_dir: &Path) -> ArtifactEntry {
        let path = slot.path_in(output_dir);
        let (status, detail) = match locate(slot, &path) {
            Ok(()) => (ArtifactStatus::Present, None),
            Err(PresentError::ArtifactMissing { .. }) => (ArtifactStatus::Missing, None),
            Err(e) => (ArtifactStatus::Invalid, Some(e.to_string())),
        };
        ArtifactEntry {
            slot: slot.id,
            kind: slot.kind,
            path,
            status,
            detail,
        }
    }

    /// Number of slots with the given status
    #[must_use]
    pub fn count(&self, status: ArtifactStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    /// Whether every artifact is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.count(ArtifactStatus::Present) == self.entries.len()
    }

    /// Human-readable table
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut lines = vec![format!("Artifacts in {}:", self.output_dir.display())];
        for e in &self.entries {
            let status = match e.status {
                ArtifactStatus::Present => "present",
                ArtifactStatus::Missing => "missing",
                ArtifactStatus::Invalid => "invalid",
            };
            let mut line = format!(
                "  {:<16} {:<6} {:<8} {}",
                e.slot,
                e.kind,
                status,
                e.path.display()
            );
            if let Some(detail) = &e.detail {
                let _ = write!(line, " ({detail})");
            }
            lines.push(line);
        }
        lines.push(format!(
            "{}/{} present",
            self.count(ArtifactStatus::Present),
            self.entries.len()
        ));
        lines.join("\n")
    }
}
