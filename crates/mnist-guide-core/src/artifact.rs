//! Artifact slots
//!
//! Each slot binds one fixed file name under the output directory to the way it
//! is shown on the page. Slots are static: the set of artifacts is known ahead
//! of time and produced by an external offline step.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// How an artifact is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Image file shown with a caption
    Image,
    /// Plain text file shown verbatim
    Text,
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.pad("image"),
            Self::Text => f.pad("text"),
        }
    }
}

/// Static descriptor of one artifact position on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtifactSlot {
    /// Stable identifier (used in logs and reports)
    pub id: &'static str,
    /// File name relative to the output directory
    pub file_name: &'static str,
    /// Display kind
    pub kind: ArtifactKind,
    /// Caption for images, subheader for text
    pub label: &'static str,
    /// Warning shown in place of the artifact when the file is absent
    pub missing_message: &'static str,
}

impl ArtifactSlot {
    /// Resolve the slot path under `output_dir`
    #[inline]
    #[must_use]
    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }
}

/// 2D PCA projection scatter plot
pub const PCA_PLOT: ArtifactSlot = ArtifactSlot {
    id: "pca",
    file_name: "pca_visualization.png",
    kind: ArtifactKind::Image,
    label: "PCA: Reduced to 2D",
    missing_message: "PCA visualization image not found!",
};

/// 2D t-SNE embedding scatter plot
pub const TSNE_PLOT: ArtifactSlot = ArtifactSlot {
    id: "tsne",
    file_name: "tsne_visualization.png",
    kind: ArtifactKind::Image,
    label: "t-SNE: Reduced to 2D",
    missing_message: "t-SNE visualization image not found!",
};

/// Cumulative explained variance curve
pub const VARIANCE_PLOT: ArtifactSlot = ArtifactSlot {
    id: "variance_plot",
    file_name: "variance_plot.png",
    kind: ArtifactKind::Image,
    label: "Cumulative Explained Variance",
    missing_message: "Variance plot image not found!",
};

/// Variance summary text
pub const VARIANCE_TEXT: ArtifactSlot = ArtifactSlot {
    id: "variance_text",
    file_name: "variance_analysis.txt",
    kind: ArtifactKind::Text,
    label: "Key Statistics",
    missing_message: "Variance analysis text not found!",
};

/// Original vs PCA-reconstructed digits
pub const RECONSTRUCTION: ArtifactSlot = ArtifactSlot {
    id: "reconstruction",
    file_name: "reconstruction_comparison.png",
    kind: ArtifactKind::Image,
    label: "Original (Top) vs Reconstructed (Bottom)",
    missing_message: "Reconstruction comparison image not found!",
};

/// All slots in page order
pub const ALL_SLOTS: [ArtifactSlot; 5] = [
    PCA_PLOT,
    TSNE_PLOT,
    VARIANCE_PLOT,
    VARIANCE_TEXT,
    RECONSTRUCTION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slot_path_joins_output_dir() {
        let path = PCA_PLOT.path_in(Path::new("visualizations"));
        assert_eq!(path, Path::new("visualizations/pca_visualization.png"));
    }

    #[test]
    fn slot_ids_and_files_unique() {
        let ids: HashSet<_> = ALL_SLOTS.iter().map(|s| s.id).collect();
        let files: HashSet<_> = ALL_SLOTS.iter().map(|s| s.file_name).collect();
        assert_eq!(ids.len(), ALL_SLOTS.len());
        assert_eq!(files.len(), ALL_SLOTS.len());
    }

    #[test]
    fn one_text_slot() {
        let text: Vec<_> = ALL_SLOTS
            .iter()
            .filter(|s| s.kind == ArtifactKind::Text)
            .collect();
        assert_eq!(text.len(), 1);
        assert_eq!(text[0].file_name, "variance_analysis.txt");
    }
}
