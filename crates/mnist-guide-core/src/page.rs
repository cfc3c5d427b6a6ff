//! Page document model
//!
//! A [`Page`] is built once per render and handed to a renderer. Local image
//! bytes are captured at build time, so rendering never touches the file system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Horizontal layout of the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Full browser width
    #[default]
    Wide,
    /// Fixed-width centered column
    Centered,
}

/// Page-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Document title
    pub title: String,
    /// Icon shown next to the title
    pub icon: String,
    /// Body layout
    pub layout: Layout,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "MNIST Dimensionality Reduction Guide".to_string(),
            icon: "🖼️".to_string(),
            layout: Layout::Wide,
        }
    }
}

/// Where an image is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local artifact file, read at build time so the page does not depend on
    /// where it is later written
    Local {
        /// Path the bytes were read from
        path: PathBuf,
        /// Media type, e.g. `image/png`
        mime: &'static str,
        /// Raw file contents
        data: Vec<u8>,
    },
    /// Remote resource referenced by URL, never fetched here
    Remote(String),
}

/// One element inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section subheading
    Subheader(String),
    /// Markdown prose
    Prose(String),
    /// Image with caption
    Image {
        /// Image location
        source: ImageSource,
        /// Caption shown under the image
        caption: String,
    },
    /// Verbatim preformatted text
    Text(String),
    /// Inline warning shown in place of a missing artifact
    Warning(String),
}

impl ImageSource {
    /// Path of a local image
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Local { path, .. } => Some(path),
            Self::Remote(_) => None,
        }
    }
}

impl Block {
    /// Whether this block is a warning
    #[inline]
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }
}

/// Collapsible narrative section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading shown on the collapsed toggle
    pub heading: String,
    /// Ordered content
    pub blocks: Vec<Block>,
    /// Initially expanded
    pub expanded: bool,
}

impl Section {
    /// Create collapsed section
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
            expanded: false,
        }
    }

    /// Append a block
    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Append several blocks
    #[must_use]
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }
}

/// Top-level page element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Free-standing Markdown
    Markdown(String),
    /// Horizontal rule
    Divider,
    /// Collapsible section
    Section(Section),
}

/// Complete page document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page-level settings
    pub settings: PageSettings,
    /// Elements in display order
    pub elements: Vec<Element>,
}

impl Page {
    /// Create empty page
    #[must_use]
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            elements: Vec::new(),
        }
    }

    /// Append an element
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Iterate over sections in order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.elements.iter().filter_map(|e| match e {
            Element::Section(s) => Some(s),
            _ => None,
        })
    }

    /// Iterate over every block of every section
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections().flat_map(|s| s.blocks.iter())
    }

    /// Warning messages in display order
    #[must_use]
    pub fn warnings(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Image captions in display order
    #[must_use]
    pub fn captions(&self) -> Vec<&str> {
        self.blocks()
            .filter_map(|b| match b {
                Block::Image { caption, .. } => Some(caption.as_str()),
                _ => None,
            })
            .collect()
    }
}
