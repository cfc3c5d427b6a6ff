use mnist_guide_core::prelude::*;
use mnist_guide_core::{ArtifactStatus, ALL_SLOTS};
use mnist_guide_test_utils::{occurrences, slots_from_mask, ArtifactFixture};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_render_is_idempotent(mask in 0u8..32) {
        let fixture = ArtifactFixture::with_slots(&slots_from_mask(mask));
        let config = fixture.config();

        let first = build_guide(&config).unwrap();
        let second = build_guide(&config).unwrap();
        prop_assert_eq!(&first, &second);

        for format in [RenderFormat::Html, RenderFormat::Text] {
            let renderer = format.renderer();
            prop_assert_eq!(renderer.render(&first), renderer.render(&second));
        }
    }

    #[test]
    fn prop_render_is_read_only(mask in 0u8..32) {
        let fixture = ArtifactFixture::with_slots(&slots_from_mask(mask));
        let before = fixture.snapshot();

        let page = build_guide(&fixture.config()).unwrap();
        let _ = HtmlRenderer::new().render(&page);
        let _ = TextRenderer::new().render(&page);
        let _ = ArtifactReport::scan(fixture.path());

        prop_assert_eq!(before, fixture.snapshot());
    }

    #[test]
    fn prop_one_warning_per_missing_slot(mask in 0u8..32) {
        let present = slots_from_mask(mask);
        let fixture = ArtifactFixture::with_slots(&present);

        let page = build_guide(&fixture.config()).unwrap();
        let missing = ALL_SLOTS.len() - present.len();
        prop_assert_eq!(page.warnings().len(), missing);

        for slot in ALL_SLOTS {
            let warned = page.warnings().contains(&slot.missing_message);
            prop_assert_eq!(warned, !present.contains(&slot));
        }

        let html = HtmlRenderer::new().render(&page);
        prop_assert_eq!(occurrences(&html, "<div class=\"warning\""), missing);

        let report = ArtifactReport::scan(fixture.path());
        prop_assert_eq!(report.count(ArtifactStatus::Missing), missing);
    }
}
