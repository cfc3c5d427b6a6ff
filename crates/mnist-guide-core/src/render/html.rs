//! HTML renderer
//!
//! Produces one standalone HTML5 document. Markdown prose goes through
//! pulldown-cmark; everything else (captions, verbatim text, warnings) is
//! escaped. Sections map to `<details>` so they stay collapsible without
//! scripting. Local images are embedded as `data:` URIs, so the document can
//! be written anywhere.

use super::{PageRenderer, RenderFormat};
use crate::page::{Block, Element, ImageSource, Layout, Page, Section};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pulldown_cmark::{html, Options, Parser as MdParser};
use pulldown_cmark_escape::{escape_href, escape_html};
use std::fmt::Write as _;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; color: #262730; }
main { padding: 2rem 3rem; }
main.layout-centered { max-width: 46rem; margin: 0 auto; }
details { border: 1px solid #e6e6e9; border-radius: 0.5rem; margin: 0.75rem 0; padding: 0.5rem 1rem; }
summary { cursor: pointer; font-weight: 600; }
figure { margin: 1rem 0; }
figure img { width: 100%; height: auto; }
figcaption { color: #6b6b76; font-size: 0.9rem; text-align: center; }
pre.artifact-text { background: #f5f5f7; padding: 0.75rem; overflow-x: auto; }
div.warning { background: #fff8e1; border-left: 4px solid #f0b400; padding: 0.75rem 1rem; margin: 1rem 0; }
";

/// Renders a [`Page`] as HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create new HTML renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn markdown(out: &mut String, source: &str) {
        let parser = MdParser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
        html::push_html(out, parser);
    }

    fn section(out: &mut String, section: &Section) {
        let open = if section.expanded { " open" } else { "" };
        let _ = writeln!(out, "<details{open}>");
        let _ = writeln!(out, "<summary>{}</summary>", escape(&section.heading));
        for block in &section.blocks {
            Self::block(out, block);
        }
        out.push_str("</details>\n");
    }

    fn block(out: &mut String, block: &Block) {
        match block {
            Block::Subheader(text) => {
                let _ = writeln!(out, "<h3>{}</h3>", escape(text));
            }
            Block::Prose(md) => Self::markdown(out, md),
            Block::Image { source, caption } => {
                out.push_str("<figure><img src=\"");
                match source {
                    ImageSource::Local { mime, data, .. } => {
                        let _ = write!(out, "data:{mime};base64,");
                        STANDARD.encode_string(data, out);
                    }
                    ImageSource::Remote(url) => {
                        let _ = escape_href(&mut *out, url);
                    }
                }
                let caption = escape(caption);
                let _ = writeln!(
                    out,
                    "\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>"
                );
            }
            Block::Text(text) => {
                // the parser drops one newline right after <pre>
                let _ = writeln!(out, "<pre class=\"artifact-text\">\n{}</pre>", escape(text));
            }
            Block::Warning(message) => {
                let _ = writeln!(
                    out,
                    "<div class=\"warning\" role=\"alert\">⚠️ {}</div>",
                    escape(message)
                );
            }
        }
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        let settings = &page.settings;
        let layout = match settings.layout {
            Layout::Wide => "layout-wide",
            Layout::Centered => "layout-centered",
        };

        let mut out = String::with_capacity(8 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", escape(&settings.title));
        out.push_str("<link rel=\"icon\" href=\"data:image/svg+xml,");
        let _ = escape_href(
            &mut out,
            &format!(
                "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
                settings.icon
            ),
        );
        out.push_str("\">\n");
        let _ = writeln!(out, "<style>\n{STYLE}</style>");
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<main class=\"{layout}\">");

        for element in &page.elements {
            match element {
                Element::Markdown(md) => Self::markdown(&mut out, md),
                Element::Divider => out.push_str("<hr>\n"),
                Element::Section(section) => Self::section(&mut out, section),
            }
        }

        out.push_str("</main>\n</body>\n</html>\n");
        out
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Html
    }
}

/// Escape text for HTML element content and quoted attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = escape_html(&mut out, text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageSettings;
    use std::path::PathBuf;

    fn page_with(blocks: Vec<Block>) -> Page {
        let mut page = Page::new(PageSettings::default());
        page.push(Element::Section(Section::new("Step").with_blocks(blocks)));
        page
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn section_is_collapsible() {
        let html = HtmlRenderer::new().render(&page_with(vec![]));
        assert!(html.contains("<details>\n<summary>Step</summary>"));
        assert!(!html.contains("<details open>"));
    }

    #[test]
    fn local_image_is_embedded() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Image {
            source: ImageSource::Local {
                path: PathBuf::from("run#3/pca_visualization.png"),
                mime: "image/png",
                data: b"\x89PNG".to_vec(),
            },
            caption: "PCA: Reduced to 2D".into(),
        }]));
        assert!(html.contains(
            "<img src=\"data:image/png;base64,iVBORw==\" alt=\"PCA: Reduced to 2D\">"
        ));
        assert!(html.contains("<figcaption>PCA: Reduced to 2D</figcaption>"));
        assert!(!html.contains("run#3"));
    }

    #[test]
    fn remote_image_href_is_escaped() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Image {
            source: ImageSource::Remote("https://example.com/a b.png?x=1&y=\"2\"".into()),
            caption: "Sample".into(),
        }]));
        assert!(html.contains("src=\"https://example.com/a%20b.png?x=1&amp;y=%222%22\""));
    }

    #[test]
    fn text_is_escaped_not_interpreted() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Text(
            "**bold?** <script>x</script>".into(),
        )]));
        assert!(html.contains(
            "<pre class=\"artifact-text\">\n**bold?** &lt;script&gt;x&lt;/script&gt;</pre>"
        ));
    }

    #[test]
    fn text_keeps_leading_newline() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Text(
            "\nExplained variance: 95.2%\n".into(),
        )]));
        assert!(html.contains(
            "<pre class=\"artifact-text\">\n\nExplained variance: 95.2%\n</pre>"
        ));
    }

    #[test]
    fn prose_is_markdown() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Prose(
            "Explore **PCA**".into(),
        )]));
        assert!(html.contains("<p>Explore <strong>PCA</strong></p>"));
    }

    #[test]
    fn warning_block() {
        let html = HtmlRenderer::new().render(&page_with(vec![Block::Warning(
            "Variance plot image not found!".into(),
        )]));
        assert!(html.contains(
            "<div class=\"warning\" role=\"alert\">⚠️ Variance plot image not found!</div>"
        ));
    }

    #[test]
    fn layout_class_follows_settings() {
        let mut page = page_with(vec![]);
        assert!(HtmlRenderer::new().render(&page).contains("<main class=\"layout-wide\">"));

        page.settings.layout = Layout::Centered;
        assert!(HtmlRenderer::new()
            .render(&page)
            .contains("<main class=\"layout-centered\">"));
    }
}
