//! MNIST Dimensionality Reduction Guide
//!
//! A read-only viewer over precomputed PCA / t-SNE artifacts. Nothing is
//! computed here: an offline step writes images and a variance summary into an
//! output directory, and this crate lays them out as a guided walkthrough.
//!
//! # Architecture
//!
//! ```text
//! output dir → ArtifactPresenter → Page → PageRenderer → HTML / text
//!                   │
//!                   └─ missing file → inline warning
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mnist_guide_core::prelude::*;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GuideConfig::new().with_output_dir("visualizations");
//! let page = build_guide(&config)?;
//! let html = HtmlRenderer::new().render(&page);
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod guide;
pub mod page;
pub mod presenter;
pub mod render;
pub mod report;

// Re-exports for convenience
pub use artifact::{ArtifactKind, ArtifactSlot, ALL_SLOTS};
pub use config::GuideConfig;
pub use error::{ConfigError, GuideError, GuideResult, PresentError};
pub use guide::build_guide;
pub use page::{Block, Element, ImageSource, Layout, Page, PageSettings, Section};
pub use presenter::{present_artifact, present_text, ArtifactPresenter};
pub use render::{HtmlRenderer, PageRenderer, RenderFormat, TextRenderer};
pub use report::{ArtifactEntry, ArtifactReport, ArtifactStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and rendering the guide
    pub use crate::config::GuideConfig;
    pub use crate::error::{GuideError, PresentError};
    pub use crate::guide::build_guide;
    pub use crate::page::{Block, Page};
    pub use crate::render::{HtmlRenderer, PageRenderer, RenderFormat, TextRenderer};
    pub use crate::report::ArtifactReport;
}
