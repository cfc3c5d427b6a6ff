//! Testing utilities for the MNIST guide workspace
//!
//! Shared fixtures for building artifact directories and checking that renders
//! leave them untouched.

#![allow(missing_docs)]

use mnist_guide_core::artifact::ArtifactSlot;
use mnist_guide_core::{GuideConfig, ALL_SLOTS};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal PNG signature; the presenter never decodes images
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Temporary output directory populated with chosen artifacts
pub struct ArtifactFixture {
    dir: TempDir,
}

impl ArtifactFixture {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_slots(slots: &[ArtifactSlot]) -> Self {
        let fixture = Self::empty();
        for slot in slots {
            fixture.write_slot(slot);
        }
        fixture
    }

    pub fn complete() -> Self {
        Self::with_slots(&ALL_SLOTS)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> GuideConfig {
        GuideConfig::new().with_output_dir(self.dir.path())
    }

    pub fn slot_path(&self, slot: &ArtifactSlot) -> PathBuf {
        slot.path_in(self.dir.path())
    }

    /// Write placeholder contents for `slot`
    pub fn write_slot(&self, slot: &ArtifactSlot) {
        let contents: &[u8] = match slot.kind {
            mnist_guide_core::ArtifactKind::Image => FAKE_PNG,
            mnist_guide_core::ArtifactKind::Text => b"Explained variance: 95.2%\n",
        };
        fs::write(self.slot_path(slot), contents).expect("write artifact");
    }

    pub fn write_text(&self, slot: &ArtifactSlot, contents: &str) {
        fs::write(self.slot_path(slot), contents).expect("write artifact");
    }

    /// File name to contents for everything in the directory
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        snapshot_dir(self.dir.path())
    }
}

pub fn snapshot_dir(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut out = BTreeMap::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return out;
    };
    for entry in entries {
        let entry = entry.expect("read dir entry");
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if path.is_file() {
            out.insert(name, fs::read(&path).expect("read file"));
        } else {
            out.insert(format!("{name}/"), Vec::new());
        }
    }
    out
}

/// Slots selected by a bitmask over [`ALL_SLOTS`]
pub fn slots_from_mask(mask: u8) -> Vec<ArtifactSlot> {
    ALL_SLOTS
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, s)| *s)
        .collect()
}

/// Count of `needle` in `haystack`
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
