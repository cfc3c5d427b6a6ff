//! The MNIST dimensionality reduction walkthrough
//!
//! Fixed narrative with five artifact slots interleaved. Sections are composed
//! top to bottom; each slot is evaluated independently on every build.

use crate::artifact::{PCA_PLOT, RECONSTRUCTION, TSNE_PLOT, VARIANCE_PLOT, VARIANCE_TEXT};
use crate::config::GuideConfig;
use crate::error::GuideResult;
use crate::page::{Block, Element, ImageSource, Page, Section};
use crate::presenter::ArtifactPresenter;
use tracing::info;

const HEADER: &str = "\
# 🖼️ MNIST Dimensionality Reduction Guide
Explore **PCA** and **t-SNE** for analyzing high-dimensional MNIST image data.\\
This step-by-step guide walks through visualizations, variance analysis, and reconstructions.
";

const INTRODUCTION: &str = "\
MNIST is a dataset of handwritten digits represented as 28x28 pixel images.\\
High-dimensional data (784 features per image) is challenging to analyze directly.\\
Dimensionality reduction techniques, such as **PCA** and **t-SNE**, simplify the data while retaining its core structure.
";

const PCA_NOTES: &str = "\
PCA reduces the dataset to **two principal components**.\\
This 2D visualization highlights the separation between different digit clusters.
";

const TSNE_NOTES: &str = "\
t-SNE captures **non-linear relationships** in the data, producing clearer clusters compared to PCA.
";

const TRADE_OFF_INSIGHTS: &str = "\
### Insights:
- Fewer components mean faster computations but lower information retention.
- More components retain more information but increase computational cost.
";

const RECONSTRUCTION_NOTES: &str = "\
Using **PCA with 100 components**, we approximate the original images.\\
While details are slightly lost, the overall structure of the digits is retained.
";

const CONCLUSION: &str = "\
### Key Takeaways:
1. **PCA** is effective for linear dimensionality reduction and image reconstruction.
2. **t-SNE** provides powerful visualizations for non-linear patterns in data.
3. Balancing **information retention** and **computational efficiency** is critical.

Dimensionality reduction enables efficient analysis of high-dimensional datasets like MNIST, making it easier to visualize, process, and understand data.

---
Thank you for exploring this guide! 🚀
";

const FOOTER: &str = "🎓 **Created with Rust | MNIST Dataset Analysis**";

/// Caption of the remote illustrative image
pub const SAMPLE_IMAGE_CAPTION: &str = "Sample MNIST Digits";

/// Section headings in display order
pub const SECTION_HEADINGS: [&str; 5] = [
    "📌 Step 1: Introduction",
    "🎨 Step 2: Visualizing Reduced Data",
    "⚖️ Step 3: Trade-Off Analysis",
    "🔄 Step 4: Original vs Reconstructed Images",
    "✅ Step 5: Conclusion",
];

/// Build the guide page for the current state of the output directory
///
/// Missing artifacts become inline warnings.
///
/// # Errors
/// An invalid config, or any artifact fault other than a missing file.
pub fn build_guide(config: &GuideConfig) -> GuideResult<Page> {
    config.validate()?;
    let presenter = ArtifactPresenter::new(&config.output_dir);
    let mut page = Page::new(config.page.clone());

    page.push(Element::Markdown(HEADER.to_string()));
    page.push(Element::Divider);

    page.push(Element::Section(
        Section::new(SECTION_HEADINGS[0])
            .with_block(Block::Prose(INTRODUCTION.to_string()))
            .with_block(Block::Image {
                source: ImageSource::Remote(config.sample_image_url.clone()),
                caption: SAMPLE_IMAGE_CAPTION.to_string(),
            }),
    ));

    page.push(Element::Section(
        Section::new(SECTION_HEADINGS[1])
            .with_block(Block::Subheader("PCA Visualization (2D Projection)".into()))
            .with_blocks(presenter.present_slot(&PCA_PLOT)?)
            .with_block(Block::Prose(PCA_NOTES.to_string()))
            .with_block(Block::Subheader("t-SNE Visualization (2D Projection)".into()))
            .with_blocks(presenter.present_slot(&TSNE_PLOT)?)
            .with_block(Block::Prose(TSNE_NOTES.to_string())),
    ));

    page.push(Element::Section(
        Section::new(SECTION_HEADINGS[2])
            .with_block(Block::Subheader(
                "Cumulative Explained Variance (PCA)".into(),
            ))
            .with_blocks(presenter.present_slot(&VARIANCE_PLOT)?)
            .with_blocks(presenter.present_slot(&VARIANCE_TEXT)?)
            .with_block(Block::Prose(TRADE_OFF_INSIGHTS.to_string())),
    ));

    page.push(Element::Section(
        Section::new(SECTION_HEADINGS[3])
            .with_block(Block::Subheader("Original vs Reconstructed Images".into()))
            .with_blocks(presenter.present_slot(&RECONSTRUCTION)?)
            .with_block(Block::Prose(RECONSTRUCTION_NOTES.to_string())),
    ));

    page.push(Element::Section(
        Section::new(SECTION_HEADINGS[4]).with_block(Block::Prose(CONCLUSION.to_string())),
    ));

    page.push(Element::Divider);
    page.push(Element::Markdown(FOOTER.to_string()));

    info!(
        output_dir = %presenter.output_dir().display(),
        warnings = page.warnings().len(),
        "guide page built"
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, GuideError};

    #[test]
    fn section_order_is_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig::new().with_output_dir(dir.path());
        let page = build_guide(&config).unwrap();

        let headings: Vec<_> = page.sections().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, SECTION_HEADINGS);
    }

    #[test]
    fn remote_image_uses_configured_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig::new()
            .with_output_dir(dir.path())
            .with_sample_image_url("https://example.com/digits.png");
        let page = build_guide(&config).unwrap();

        let intro = page.sections().next().unwrap();
        assert!(intro.blocks.contains(&Block::Image {
            source: ImageSource::Remote("https://example.com/digits.png".into()),
            caption: SAMPLE_IMAGE_CAPTION.into(),
        }));
    }

    #[test]
    fn invalid_config_rejected_before_any_read() {
        let config = GuideConfig::new().with_sample_image_url(" ");
        let err = build_guide(&config).unwrap_err();
        assert!(matches!(err, GuideError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn page_starts_with_header_and_divider() {
        let dir = tempfile::tempdir().unwrap();
        let page = build_guide(&GuideConfig::new().with_output_dir(dir.path())).unwrap();

        assert!(matches!(&page.elements[0], Element::Markdown(md) if md.starts_with("# 🖼️")));
        assert_eq!(page.elements[1], Element::Divider);
        assert!(matches!(page.elements.last(), Some(Element::Markdown(_))));
    }
}
