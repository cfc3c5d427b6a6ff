//! Page renderers
//!
//! Turn a built [`Page`] into output text:
//! - HTML document with collapsible sections
//! - Plain text for terminals
//!
//! Renderers are pure: the same page always renders to the same string.

use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// Renderer trait for converting a page into an output document
pub trait PageRenderer {
    /// Render the full page
    fn render(&self, page: &Page) -> String;

    /// Format produced by this renderer
    fn format(&self) -> RenderFormat;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Standalone HTML5 document
    #[default]
    Html,
    /// Plain text
    Text,
}

impl RenderFormat {
    /// Renderer for this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn PageRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new()),
            Self::Text => Box::new(TextRenderer::new()),
        }
    }
}

impl Display for RenderFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Text => f.write_str("text"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown render format: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse() {
        assert_eq!("html".parse::<RenderFormat>(), Ok(RenderFormat::Html));
        assert_eq!("TXT".parse::<RenderFormat>(), Ok(RenderFormat::Text));
        assert!("pdf".parse::<RenderFormat>().is_err());
    }

    #[test]
    fn renderer_matches_format() {
        for format in [RenderFormat::Html, RenderFormat::Text] {
            assert_eq!(format.renderer().format(), format);
        }
    }
}
