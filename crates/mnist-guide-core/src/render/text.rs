//! Plain text renderer
//!
//! Markdown prose is flattened to text with pulldown-cmark. Verbatim artifact
//! text is emitted unchanged.

use super::{PageRenderer, RenderFormat};
use crate::page::{Block, Element, ImageSource, Page, Section};
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use std::fmt::Write as _;

const RULE: &str = "------------------------------------------------------------";

/// Renders a [`Page`] as plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create new text renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn section(out: &mut String, section: &Section) {
        let _ = writeln!(out, "[+] {}\n", section.heading);
        for block in &section.blocks {
            match block {
                Block::Subheader(text) => {
                    let _ = writeln!(out, "## {text}\n");
                }
                Block::Prose(md) => {
                    out.push_str(&flatten_markdown(md));
                    out.push('\n');
                }
                Block::Image { source, caption } => {
                    let location = match source {
                        ImageSource::Local { path, .. } => path.display().to_string(),
                        ImageSource::Remote(url) => url.clone(),
                    };
                    let _ = writeln!(out, "[image] {location}\n        {caption}\n");
                }
                Block::Text(text) => {
                    out.push_str(text);
                    if !text.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push('\n');
                }
                Block::Warning(message) => {
                    let _ = writeln!(out, "WARNING: {message}\n");
                }
            }
        }
    }
}

impl PageRenderer for TextRenderer {
    fn render(&self, page: &Page) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {}\n", page.settings.icon, page.settings.title);

        for element in &page.elements {
            match element {
                Element::Markdown(md) => {
                    out.push_str(&flatten_markdown(md));
                    out.push('\n');
                }
                Element::Divider => {
                    let _ = writeln!(out, "{RULE}\n");
                }
                Element::Section(section) => Self::section(&mut out, section),
            }
        }
        out
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Text
    }
}

/// Strip Markdown markup, keeping line structure and list markers
#[must_use]
pub(crate) fn flatten_markdown(source: &str) -> String {
    let mut out = String::new();
    // Next ordinal per open list; None for bullet lists
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in MdParser::new(source) {
        match event {
            Event::Start(Tag::List(start)) => lists.push(start),
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                out.push('\n');
            }
            Event::Start(Tag::Item) => match lists.last_mut() {
                Some(Some(n)) => {
                    let _ = write!(out, "{n}. ");
                    *n += 1;
                }
                _ => out.push_str("- "),
            },
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak | Event::End(TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::Paragraph) if lists.is_empty() => out.push_str("\n\n"),
            Event::End(TagEnd::Heading(_)) => out.push_str("\n\n"),
            Event::Rule => {
                let _ = writeln!(out, "{RULE}\n");
            }
            _ => {}
        }
    }
    out
}
